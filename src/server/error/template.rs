use thiserror::Error;

/// Failures while loading the template directory at startup.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// A template file failed to parse, or the directory glob is invalid.
    #[error("Failed to load templates from '{dir}': {source}")]
    Load {
        /// Directory the templates were loaded from
        dir: String,
        /// The underlying Tera error
        #[source]
        source: tera::Error,
    },

    /// A template the handlers render is absent from the directory.
    #[error("Required template '{name}' not found in '{dir}'")]
    MissingTemplate {
        /// File name of the missing template
        name: String,
        /// Directory the templates were loaded from
        dir: String,
    },
}
