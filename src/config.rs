/// The configuration parameters for the application.
#[derive(clap::Parser, Clone)]
pub struct Config {
    /// The base URL for the remote country metadata source.
    #[clap(long, env, default_value = "https://restcountries.com/v3.1")]
    pub countries_api_url: String,

    /// The base URL for the remote world time source.
    #[clap(long, env, default_value = "http://worldtimeapi.org/api")]
    pub world_time_api_url: String,

    /// The number of directory entries shown by the world clock feed.
    #[clap(long, env, default_value_t = 12)]
    pub clock_limit: usize,

    /// The PORT number for the server address.
    #[clap(long, env)]
    pub port: u16,
}
