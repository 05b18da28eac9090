pub mod generation_service;
pub mod http_helpers;
pub mod model_service;
