use telcoref_core::catalog::CatalogError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Built-in catalog is invalid: {0}")]
    InvalidCatalog(#[from] CatalogError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
