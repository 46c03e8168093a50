use clap::Parser;

#[derive(Debug, Clone)]
pub struct Config {
    pub socket: String,
    pub app_id: String,
    pub x: i64,
    pub y: i64,
}

#[derive(Parser, Debug)]
#[command(name = "wfipc")]
#[command(about = "Move an ueberzugpp overlay via the Wayfire IPC socket", long_about = None)]
pub struct Cli {
    /// Path to the Wayfire IPC socket (defaults to $WAYFIRE_SOCKET)
    #[arg(long, short)]
    socket: Option<String>,

    /// App id of the overlay surface to move
    pub app_id: String,

    #[arg(default_value_t = 0)]
    pub x: i64,
    #[arg(default_value_t = 0)]
    pub y: i64,
}

impl Cli {
    pub fn from_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            socket: self
                .socket
                .or_else(|| std::env::var("WAYFIRE_SOCKET").ok())
                .unwrap_or_default(),
            app_id: self.app_id,
            x: self.x,
            y: self.y,
        }
    }
}
