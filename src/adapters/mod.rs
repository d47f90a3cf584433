pub mod assets;
pub mod filesystem;

pub use assets::ServerTemplates;
pub use filesystem::FilesystemStore;
