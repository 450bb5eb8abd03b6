//! # Postboard CLI
//!
//! `postboard list | create | edit | delete`, printing the reloaded list
//! after every change.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use postboard_cli::{PostsClient, PostsView};
use postboard_shared::dto::PostResponse;

#[derive(Debug, Parser)]
#[command(name = "postboard", version, about = "Manage posts from the terminal")]
struct Cli {
    /// Base URL of the posts API.
    #[arg(long, env = "API_URL", default_value = postboard_cli::client::DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the first page of posts.
    List,
    /// Create a post.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Edit a post; omitted fields keep their current value.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a post.
    Delete { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut view = PostsView::new(PostsClient::new(cli.api_url));

    match cli.command {
        Command::List => view.load().await,
        Command::Create {
            title,
            content,
            category,
        } => {
            let form = view.form_mut();
            form.title = title;
            form.content = content;
            form.category = category;
            view.submit().await.context("creating post")?;
        }
        Command::Edit {
            id,
            title,
            content,
            category,
        } => {
            let post = view
                .client()
                .get(&id)
                .await
                .with_context(|| format!("loading post {id}"))?;
            view.edit(&post);

            let form = view.form_mut();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(content) = content {
                form.content = content;
            }
            if let Some(category) = category {
                form.category = category;
            }
            view.submit().await.context("updating post")?;
        }
        Command::Delete { id } => {
            view.delete(&id)
                .await
                .with_context(|| format!("deleting post {id}"))?;
        }
    }

    render(view.posts());
    Ok(())
}

fn render(posts: &[PostResponse]) {
    if posts.is_empty() {
        println!("No posts.");
        return;
    }

    for post in posts {
        match &post.category {
            Some(category) => println!("{}  {} [{}]", post.id, post.title, category),
            None => println!("{}  {}", post.id, post.title),
        }
        println!("    {}", post.content);
    }
}
