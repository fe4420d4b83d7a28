use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::routing::get;
use axum::{Form, Router};
use maud::Markup;
use tracing::info;

use super::error::WebError;
use super::forms::PostForm;
use super::pages::{
    render_confirm_delete_page, render_home_page, render_post_form_page, render_post_page,
    ConfirmDeleteParams, HomePageParams, PostFormParams, PostPageParams, PostSummary,
};
use super::AppState;
use crate::db::{create_post, delete_post, get_post, list_posts, update_post};

type PostId = Result<Path<i64>, PathRejection>;

/// Raw urlencoded pairs; rejections are handled by the handler so they can
/// rank below a missing post.
type FormPairs = Result<Form<Vec<(String, String)>>, FormRejection>;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/post/:id/", get(view_post))
        .route("/create/", get(create_form).post(create_submit))
        .route("/edit/:id/", get(edit_form).post(edit_submit))
        .route("/delete/:id/", get(delete_confirm).post(delete_submit))
        .route("/healthz", get(health))
}

// ========== Read ==========

async fn index(State(state): State<AppState>) -> Result<Markup, WebError> {
    let posts: Vec<PostSummary> = list_posts(state.db.pool())
        .await?
        .into_iter()
        .map(|post| PostSummary::new(post, state.config.excerpt_length))
        .collect();

    Ok(render_home_page(&HomePageParams {
        site_title: &state.config.site_title,
        posts: &posts,
    }))
}

async fn view_post(State(state): State<AppState>, id: PostId) -> Result<Markup, WebError> {
    let Path(id) = id?;
    let post = get_post(state.db.pool(), id).await?;

    Ok(render_post_page(&PostPageParams {
        site_title: &state.config.site_title,
        post: &post,
    }))
}

// ========== Create ==========

async fn create_form(State(state): State<AppState>) -> Markup {
    render_post_form_page(&PostFormParams::create(&state.config.site_title))
}

async fn create_submit(
    State(state): State<AppState>,
    form: FormPairs,
) -> Result<Redirect, WebError> {
    let Form(pairs) = form?;
    let draft = pairs.into_iter().collect::<PostForm>().into_draft()?;
    let post = create_post(state.db.pool(), &draft).await?;

    info!(post_id = post.id, "Post created");
    Ok(Redirect::to("/"))
}

// ========== Edit ==========

async fn edit_form(State(state): State<AppState>, id: PostId) -> Result<Markup, WebError> {
    let Path(id) = id?;
    let post = get_post(state.db.pool(), id).await?;
    let action = format!("/edit/{id}/");

    Ok(render_post_form_page(&PostFormParams::edit(
        &state.config.site_title,
        &action,
        &post,
    )))
}

async fn edit_submit(
    State(state): State<AppState>,
    id: PostId,
    form: FormPairs,
) -> Result<Redirect, WebError> {
    let Path(id) = id?;
    // A missing post is reported before any complaint about the submitted fields.
    get_post(state.db.pool(), id).await?;

    let Form(pairs) = form?;
    let draft = pairs.into_iter().collect::<PostForm>().into_draft()?;
    update_post(state.db.pool(), id, &draft).await?;

    info!(post_id = id, "Post updated");
    Ok(Redirect::to(&format!("/post/{id}/")))
}

// ========== Delete ==========

async fn delete_confirm(State(state): State<AppState>, id: PostId) -> Result<Markup, WebError> {
    let Path(id) = id?;
    let post = get_post(state.db.pool(), id).await?;

    Ok(render_confirm_delete_page(&ConfirmDeleteParams {
        site_title: &state.config.site_title,
        post: &post,
    }))
}

async fn delete_submit(State(state): State<AppState>, id: PostId) -> Result<Redirect, WebError> {
    let Path(id) = id?;
    delete_post(state.db.pool(), id).await?;

    info!(post_id = id, "Post deleted");
    Ok(Redirect::to("/"))
}

// ========== Misc ==========

async fn health() -> &'static str {
    "OK"
}
