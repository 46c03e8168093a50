use wfipc::ipc::template;
use wfipc::ipc::WayfireClient;

use crate::cli::Config;

pub async fn run(config: Config) -> anyhow::Result<()> {
    let mut msg = template::get_template("ueberzugpp/set_offset")?;
    msg.set("app-id", config.app_id)
        .set("x", config.x)
        .set("y", config.y);

    let mut client = WayfireClient::connect(&config.socket).await?;
    let response = client.send_request(&msg).await?;
    println!("{}", response);

    client.close();
    Ok(())
}
