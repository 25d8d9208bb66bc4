pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,
}
