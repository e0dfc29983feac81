use anyhow::Result;
use clap::{App, Arg};
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;

use news_client::client_api::NewsClient;
use news_client::generator::random_info;
use news_client::http_client::HttpNewsClient;
use news_client::news::News;

// Spawns concurrent writers against the server, then reads every created id
// back to check that no write was lost.

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("News Benchmark")
        .version("1.0")
        .about("Concurrent create/get load against the news server")
        .arg(
            Arg::new("server")
                .short('s')
                .long("server")
                .takes_value(true)
                .default_value("http://localhost:8080"),
        )
        .arg(
            Arg::new("writers")
                .long("writers")
                .takes_value(true)
                .default_value("8"),
        )
        .arg(
            Arg::new("per_writer")
                .long("per-writer")
                .takes_value(true)
                .default_value("50"),
        )
        .get_matches();

    let server = matches.value_of("server").unwrap_or("http://localhost:8080");
    let writers: usize = matches.value_of("writers").unwrap_or("8").parse()?;
    let per_writer: usize = matches.value_of("per_writer").unwrap_or("50").parse()?;
    let client = Arc::new(HttpNewsClient::new(server)?);

    info!("Start running workload: {} writers x {}", writers, per_writer);
    let start = Instant::now();
    let created = load_run(client.clone(), writers, per_writer).await?;
    info!("Created {} news in {:?}", created.len(), start.elapsed());

    let start = Instant::now();
    let lost = verify(client.as_ref(), &created).await?;
    info!("Read back {} news in {:?}", created.len(), start.elapsed());
    if lost > 0 {
        warn!("{} news were not found after creation", lost);
    }
    Ok(())
}

async fn load_run(client: Arc<HttpNewsClient>, writers: usize, per_writer: usize) -> Result<Vec<News>> {
    let mut handles = Vec::with_capacity(writers);
    for _ in 0..writers {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let mut created = Vec::with_capacity(per_writer);
            for _ in 0..per_writer {
                let info = random_info(&mut rand::thread_rng());
                created.push(client.create_news(&info).await?);
            }
            Ok::<_, anyhow::Error>(created)
        }));
    }

    let mut all = Vec::with_capacity(writers * per_writer);
    for handle in handles {
        all.extend(handle.await??);
    }
    Ok(all)
}

async fn verify(client: &dyn NewsClient, created: &[News]) -> Result<usize> {
    let mut lost = 0;
    for news in created {
        match client.get_news(news.id).await? {
            Some(fetched) if fetched.info == news.info => {}
            Some(_) => warn!("news {} was overwritten by a colliding id", news.id),
            None => lost += 1,
        }
    }
    Ok(lost)
}
