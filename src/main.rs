use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bookstash::cli::{
    BookmarkCommands, FolderCommands, TransferCommands, TrashCommands, run_bookmark_add,
    run_bookmark_delete, run_bookmark_edit, run_bookmark_reorder, run_export, run_folder_create,
    run_folder_delete, run_folder_move, run_folder_rename, run_folder_reorder, run_import,
    run_init, run_search, run_trash_empty, run_trash_list, run_trash_purge_bookmark,
    run_trash_purge_folder, run_trash_restore_bookmark, run_trash_restore_folder, run_tree,
};
use bookstash::config::ServerConfig;
use bookstash::server::{AppState, create_router};
use bookstash::store::SqliteStore;

#[derive(Parser)]
#[command(name = "bookstash")]
#[command(about = "A personal bookmark manager with folders, trash and bookmark-file import/export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, short)]
        port: Option<u16>,

        /// Data directory containing the database
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Create the database and signing secret
    Init {
        /// Data directory for the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,
    },

    /// Manage folders
    Folder {
        #[command(subcommand)]
        command: FolderCommands,
    },

    /// Manage bookmarks
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommands,
    },

    /// Print the active folder tree
    Tree {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search active bookmarks by title or URL
    Search {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Text to look for
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect and manage the trash
    Trash {
        #[command(subcommand)]
        command: TrashCommands,
    },

    #[command(flatten)]
    Transfer(TransferCommands),
}

async fn run_serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = ServerConfig::load(config_path.as_deref())?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data_dir) = data_dir {
        config.data_dir = data_dir;
    }

    let db_path = config.db_path();
    if !db_path.exists() {
        bail!("Database not found at {}. Run 'bookstash init' first.", db_path.display());
    }

    let store = SqliteStore::new(&db_path)?;
    let state = Arc::new(AppState::new(Arc::new(store), config.settings_ttl()));
    state.settings.signing_secret()?;

    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bookstash=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            data_dir,
        } => run_serve(config, host, port, data_dir).await?,
        Commands::Init { data_dir } => run_init(data_dir)?,
        Commands::Folder { command } => match command {
            FolderCommands::Create {
                data_dir,
                name,
                parent,
            } => run_folder_create(data_dir, name, parent)?,
            FolderCommands::Rename { data_dir, id, name } => run_folder_rename(data_dir, id, name)?,
            FolderCommands::Move {
                data_dir,
                id,
                parent,
                root,
            } => run_folder_move(data_dir, id, parent, root)?,
            FolderCommands::Delete { data_dir, id } => run_folder_delete(data_dir, id)?,
            FolderCommands::Reorder { data_dir, ids } => run_folder_reorder(data_dir, ids)?,
        },
        Commands::Bookmark { command } => match command {
            BookmarkCommands::Add {
                data_dir,
                title,
                url,
                description,
                folder,
            } => run_bookmark_add(data_dir, title, url, description, folder)?,
            BookmarkCommands::Edit {
                data_dir,
                id,
                title,
                url,
                description,
                clear_description,
                folder,
                root,
            } => run_bookmark_edit(
                data_dir,
                id,
                title,
                url,
                description,
                clear_description,
                folder,
                root,
            )?,
            BookmarkCommands::Delete { data_dir, id } => run_bookmark_delete(data_dir, id)?,
            BookmarkCommands::Reorder { data_dir, ids } => run_bookmark_reorder(data_dir, ids)?,
        },
        Commands::Tree { data_dir, json } => run_tree(data_dir, json)?,
        Commands::Search {
            data_dir,
            query,
            json,
        } => run_search(data_dir, query, json)?,
        Commands::Trash { command } => match command {
            TrashCommands::List { data_dir, json } => run_trash_list(data_dir, json)?,
            TrashCommands::RestoreFolder { data_dir, id } => {
                run_trash_restore_folder(data_dir, id)?
            }
            TrashCommands::RestoreBookmark { data_dir, id } => {
                run_trash_restore_bookmark(data_dir, id)?
            }
            TrashCommands::PurgeFolder { data_dir, id } => run_trash_purge_folder(data_dir, id)?,
            TrashCommands::PurgeBookmark { data_dir, id } => {
                run_trash_purge_bookmark(data_dir, id)?
            }
            TrashCommands::Empty { data_dir } => run_trash_empty(data_dir)?,
        },
        Commands::Transfer(command) => match command {
            TransferCommands::Import { data_dir, file } => run_import(data_dir, file)?,
            TransferCommands::Export { data_dir, output } => run_export(data_dir, output)?,
        },
    }

    Ok(())
}
