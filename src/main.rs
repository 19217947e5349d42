//! Operator CLI for the back-office API.
//!
//! `cabinet-admin list formations`, `cabinet-admin search articles <q>`,
//! `cabinet-admin get missions <id>`, `cabinet-admin delete partenaires <id>`.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, bail};

use cabinet_admin::client::{ResourceApi, RestClient};
use cabinet_admin::domain::article::Article;
use cabinet_admin::domain::contact::Contact;
use cabinet_admin::domain::formation::Formation;
use cabinet_admin::domain::mission::Mission;
use cabinet_admin::domain::offering::Offering;
use cabinet_admin::domain::partner::Partner;
use cabinet_admin::domain::Resource;
use cabinet_admin::models::config::AppConfig;
use cabinet_admin::services::deletion::DeleteFlow;

const USAGE: &str = "usage: cabinet-admin <list|search|get|delete> <resource> [arg]
resources: contacts, formations, services, partenaires, articles, missions";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> anyhow::Result<()> {
    let config = AppConfig::load().context("configuration error (set CABINET_API_BASE_URL)")?;

    let [command, resource, rest @ ..] = args else {
        bail!("{USAGE}");
    };

    match resource.as_str() {
        "contacts" => operate::<Contact>(&config, command, rest).await,
        "formations" => operate::<Formation>(&config, command, rest).await,
        "services" => operate::<Offering>(&config, command, rest).await,
        "partenaires" => operate::<Partner>(&config, command, rest).await,
        "articles" | "article-blogs" => operate::<Article>(&config, command, rest).await,
        "missions" => operate::<Mission>(&config, command, rest).await,
        other => bail!("unknown resource: {other}\n{USAGE}"),
    }
}

async fn operate<T: Resource>(
    config: &AppConfig,
    command: &str,
    rest: &[String],
) -> anyhow::Result<()> {
    let client = RestClient::<T>::new(&config.api_base_url, config.request_timeout())?;

    match command {
        "list" => {
            let items = client.list().await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        "search" => {
            if rest.is_empty() {
                bail!("search needs a query\n{USAGE}");
            }
            let query = rest.join(" ");
            let items = client.search(&query).await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        "get" => {
            let id = parse_id(rest)?;
            let item = client.get(id).await?;
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        "delete" => {
            let id = parse_id(rest)?;
            delete_with_confirmation(&client, id).await?;
        }
        other => bail!("unknown command: {other}\n{USAGE}"),
    }

    Ok(())
}

/// Two-step delete: fetch the entity so the prompt can name it, then ask
/// before issuing the destructive call.
async fn delete_with_confirmation<T: Resource>(
    client: &RestClient<T>,
    id: i64,
) -> anyhow::Result<()> {
    let entity = client.get(id).await?;

    let mut flow = DeleteFlow::new();
    flow.request(entity.clone());

    print!("Supprimer « {} » ? Cette action est irréversible. [o/N] ", entity.label());
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    if !matches!(answer.trim().to_lowercase().as_str(), "o" | "oui" | "y") {
        flow.cancel();
        println!("Annulé.");
        return Ok(());
    }

    let Some(id) = flow.begin() else {
        return Ok(());
    };
    match client.delete(id).await {
        Ok(()) => {
            flow.settle(true);
            println!("Suppression effectuée.");
            Ok(())
        }
        Err(err) => {
            flow.settle(false);
            Err(err.into())
        }
    }
}

fn parse_id(rest: &[String]) -> anyhow::Result<i64> {
    let raw = rest.first().with_context(|| format!("an id is required\n{USAGE}"))?;
    raw.parse::<i64>()
        .with_context(|| format!("invalid id: {raw}"))
}
