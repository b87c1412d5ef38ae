//! Command implementations.

pub mod carousel;
pub mod image;
pub mod init;
pub mod models;
pub mod post;
pub mod providers;
pub mod suggest;

pub use self::carousel::execute_carousel;
pub use self::image::execute_image;
pub use self::init::execute_init;
pub use self::models::execute_models;
pub use self::post::execute_post;
pub use self::providers::execute_providers;
pub use self::suggest::execute_suggest;
