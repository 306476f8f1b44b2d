pub mod create;
pub mod edit;
pub mod index;
pub mod show;

pub use create::create_page;
pub use edit::edit_page;
pub use index::index_page;
pub use show::show_page;
