mod get_content_use_case;

pub use get_content_use_case::GetContentUseCase;
