use anyhow::{bail, Result};
use clap::{App, Arg};
use log::info;

use news_client::client_api::NewsClient;
use news_client::generator::random_info;
use news_client::http_client::HttpNewsClient;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("News Client")
        .version("1.0")
        .about("Creates random news items and reads them back")
        .arg(
            Arg::new("server")
                .short('s')
                .long("server")
                .takes_value(true)
                .default_value("http://localhost:8080")
                .help("Base URL of the news server"),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .takes_value(true)
                .default_value("1")
                .help("Number of news items to create"),
        )
        .get_matches();

    let server = matches.value_of("server").unwrap_or("http://localhost:8080");
    let count: usize = matches.value_of("count").unwrap_or("1").parse()?;
    let client = HttpNewsClient::new(server)?;

    let mut rng = rand::thread_rng();
    for _ in 0..count {
        let created = client.create_news(&random_info(&mut rng)).await?;
        info!("News created: {:?}", created);

        let fetched = match client.get_news(created.id).await? {
            Some(news) => news,
            None => bail!("news {} was created but is not found", created.id),
        };
        info!("News fetched: {:?}", fetched);
        if fetched != created {
            bail!("news {} changed between create and get", created.id);
        }
    }
    Ok(())
}
