use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::{AudioLength, DepthLevel},
        dto::request::{
            GenerateAudioRequest, GenerateCodeRequest, GenerateTextRequest, GenerateVisualRequest,
        },
    },
    services::http_helpers::success_json,
};

#[post("/api/generate/text")]
async fn generate_text(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateTextRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let depth = DepthLevel::from_option(request.depth());
    log::info!(
        "[{}] Text generation requested: topic={:?}, depth={}",
        get_request_id(&req).unwrap_or_default(),
        request.topic,
        depth
    );

    let data = state
        .generation_service
        .generate_text(request.topic.trim(), depth)
        .await?;
    Ok(success_json(data))
}

#[post("/api/generate/code")]
async fn generate_code(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateCodeRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let complexity = DepthLevel::from_option(request.complexity());
    log::info!(
        "[{}] Code generation requested: topic={:?}, complexity={}",
        get_request_id(&req).unwrap_or_default(),
        request.topic,
        complexity
    );

    let data = state
        .generation_service
        .generate_code(request.topic.trim(), complexity)
        .await?;
    Ok(success_json(data))
}

#[post("/api/generate/audio")]
async fn generate_audio(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateAudioRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let length = AudioLength::from_option(request.length());
    log::info!(
        "[{}] Audio script requested: topic={:?}, length={}",
        get_request_id(&req).unwrap_or_default(),
        request.topic,
        length
    );

    let data = state
        .generation_service
        .generate_audio(request.topic.trim(), length)
        .await?;
    Ok(success_json(data))
}

#[post("/api/generate/visual")]
async fn generate_visual(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateVisualRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] Visual generation requested: topic={:?}",
        get_request_id(&req).unwrap_or_default(),
        request.topic
    );

    let data = state
        .generation_service
        .generate_visual(request.topic.trim())
        .await?;
    Ok(success_json(data))
}
