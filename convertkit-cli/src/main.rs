use clap::{Parser, Subcommand};
use convertkit::{Client, SubscriberState, SubscribersRequest, SubscriptionsRequest};
use futures_util::StreamExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser, Clone)]
#[command(name = "convertkit")]
#[command(about = "A CLI tool to inspect and manage a ConvertKit account")]
struct Cli {
    #[arg(short = 's', long, env = "CONVERTKIT_API_SECRET", hide_env_values = true)]
    api_secret: String,
    #[arg(short, long, env = "CONVERTKIT_BASE_URL", default_value = convertkit::DEFAULT_BASE_URL)]
    base_url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand, Clone)]
enum Commands {
    #[command(about = "Shows the account that owns the API secret")]
    Account,
    #[command(about = "Lists all the forms")]
    Forms,
    #[command(about = "Lists all the sequences")]
    Sequences,
    #[command(about = "Lists all the tags")]
    Tags,
    #[command(about = "Creates one tag per given name")]
    CreateTags {
        #[arg(required = true)]
        names: Vec<String>,
    },
    #[command(about = "Lists all the subscribers, across every page")]
    Subscribers,
    #[command(about = "Lists the cancelled subscriptions of a tag")]
    Cancelled { tag_id: u64 },
    #[command(about = "Unsubscribes an email address")]
    Unsubscribe { email: String },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let client = Client::new(args.api_secret)?.with_base_url(&args.base_url)?;

    match args.command {
        Commands::Account => {
            let account = client.account().await?;
            println!("{} <{}>", account.name, account.primary_email);
        }
        Commands::Forms => {
            println!("id,name");
            for form in client.forms().await?.forms {
                println!("{},\"{}\"", form.id, form.name);
            }
        }
        Commands::Sequences => {
            println!("id,name");
            for sequence in client.sequences().await?.sequences {
                println!("{},\"{}\"", sequence.id, sequence.name);
            }
        }
        Commands::Tags => {
            println!("id,name");
            for tag in client.tags().await?.tags {
                println!("{},\"{}\"", tag.id, tag.name);
            }
        }
        Commands::CreateTags { names } => {
            for tag in client.create_tags(names).await?.tags {
                println!("Created tag {} with id {}", tag.name, tag.id);
            }
        }
        Commands::Subscribers => {
            let stream = client.all_subscribers(SubscribersRequest::default());
            println!("id,email_address,state");
            stream
                .for_each(|res| async move {
                    match res {
                        Ok(subscriber) => println!(
                            "{},{},{}",
                            subscriber.id, subscriber.email, subscriber.state
                        ),
                        Err(err) => eprintln!("{err}"),
                    }
                })
                .await;
        }
        Commands::Cancelled { tag_id } => {
            let req = SubscriptionsRequest {
                subscriber_state: Some(SubscriberState::Cancelled),
                ..Default::default()
            };
            println!("subscription_id,email_address");
            for subscription in client.tag_subscriptions(tag_id, &req).await?.subscriptions {
                println!("{},{}", subscription.id, subscription.subscriber.email);
            }
        }
        Commands::Unsubscribe { email } => {
            let resp = client.unsubscribe_subscriber(&email).await?;
            println!("Unsubscribed {}", resp.subscriber.email);
        }
    }

    Ok(())
}
