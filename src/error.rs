use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to render diagram: the graphviz `dot` executable was not found on PATH")]
    GraphvizNotFound,
    #[error("graphviz exited with status {0} while rendering the diagram")]
    GraphvizFailed(std::process::ExitStatus),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
