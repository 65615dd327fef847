use axum::{
    Json, Router,
    extract::{Query, State},
    routing::post,
};
use scribe::article::ArticleResult;
use scribe::observe::preview;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ArticleQuery {
    article_name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/article-agent",
    tag = "article",
    params(
        ("article_name" = Option<String>, Query, description = "Title of the article to generate")
    ),
    responses(
        (status = 200, description = "Summary and article body", body = ArticleResult),
        (status = 400, description = "Title is missing or blank"),
        (status = 500, description = "Article generation failed")
    )
)]
pub async fn generate_article(
    State(state): State<AppState>,
    Query(query): Query<ArticleQuery>,
) -> Result<Json<ArticleResult>, ApiError> {
    let title = query.article_name.unwrap_or_default();
    info!("Received article request: {}", preview(&title));

    let article = state.generator.generate(&title).await?;
    info!("Generated article summary: {}", preview(&article.summary));

    Ok(Json(article))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/article-agent", post(generate_article))
        .route("/article-agent/", post(generate_article))
}
