pub mod export;
pub mod history;
pub mod users;

pub use export::export_csv;
pub use users::UserService;
