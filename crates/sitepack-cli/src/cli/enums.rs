use clap::ValueEnum;

/// Serialization format for printed configurations
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum SerializationFormat {
    /// Pretty-printed JSON
    #[value(name = "json")]
    Json,

    /// TOML, in the same shape sitepack.toml accepts
    #[value(name = "toml")]
    Toml,
}
