use clap::{Parser, Subcommand};
use lichen_api::{csrf_token, WorldClient};
use lichen_core::WorldRecord;
use lichen_dom::Page;
use lichen_engine::gate;
use lichen_overlay::annotate::compact_date;
use lichen_overlay::patch::apply_annotations;
use lichen_overlay::target::find_container;

#[derive(Parser)]
#[command(name = "lichen")]
#[command(about = "Annotate captured world views with data from the space API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one activation against a captured page and print the result
    Annotate {
        #[arg(long, help = "Path to a captured world page (HTML)")]
        fixture: String,
        #[arg(long, help = "Address the capture was taken at")]
        address: String,
        #[arg(long, help = "Override the world API endpoint")]
        endpoint: Option<String>,
        #[arg(long, help = "CSRF token to use when the capture carries none")]
        token: Option<String>,
    },
    /// Check whether an address would activate the annotator
    Gate {
        address: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lichen=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Annotate {
            fixture,
            address,
            endpoint,
            token,
        } => run_annotate(fixture, address, endpoint, token).await,
        Commands::Gate { address } => run_gate(address),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_gate(address: String) -> Result<(), Box<dyn std::error::Error>> {
    if !gate::is_world_page(&address) {
        println!("not a world view: {}", address);
        return Ok(());
    }
    match gate::world_id(&address) {
        Some(id) => println!("world view, id: {}", id),
        None => println!("world view shape, but no id could be extracted"),
    }
    Ok(())
}

async fn run_annotate(
    fixture: String,
    address: String,
    endpoint: Option<String>,
    token: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let world_id = match gate::world_id(&address) {
        Some(id) => id,
        None => return Err(format!("{} is not a world view address", address).into()),
    };

    let html = std::fs::read_to_string(&fixture)?;
    let page = Page::from_html(&address, &html);
    if let Some(token) = token {
        page.storage_set("csrfToken", &token);
    }

    let client = match endpoint {
        Some(url) => WorldClient::with_endpoint(url),
        None => WorldClient::new(),
    };

    println!("fetching world {}...", world_id);
    let token = csrf_token(&page);
    let record = match client.fetch_world(&world_id, &token).await? {
        Some(record) => record,
        None => {
            println!("world {} does not exist", world_id);
            return Ok(());
        }
    };

    print_record(&record);

    apply_annotations(&page, &record).map_err(|e| format!("patch failed: {}", e))?;

    println!("\n--- annotated container ---");
    let dump = page.with_dom(|dom| find_container(dom).map(|c| dom.outer_html(c)));
    match dump {
        Some(html) => println!("{}", html),
        None => println!("(container missing)"),
    }

    Ok(())
}

fn print_record(record: &WorldRecord) {
    println!("\n--- world {} ---", record.id);
    if let Some(name) = &record.name {
        println!("name: {}", name);
    }
    if let Some(user) = &record.user {
        if let Some(nickname) = &user.nickname {
            println!("author: {}", nickname);
        }
    }
    if !record.tags.is_empty() {
        println!("tags: {:?}", record.tags);
    }
    if let Some(visits) = record.visit_count {
        println!(
            "visits: {} total / {} today",
            visits,
            record.today_visit_count.unwrap_or(0)
        );
    }
    if let Some(cheer) = record.cheer.as_ref().and_then(|c| c.total) {
        println!("cheers: {}", cheer);
    }
    if let Some(comments) = record.comment_count {
        println!("comments: {}", comments);
    }
    if let Some(updated) = record.updated_at {
        println!("updated: {} ({})", updated.to_rfc3339(), compact_date(&updated));
    }

    let mut flags = Vec::new();
    if record.staff_picked.unwrap_or(false) {
        flags.push("staff-picked");
    }
    if record.ranked.unwrap_or(false) {
        flags.push("ranked");
    }
    if record.locked.unwrap_or(false) {
        flags.push("locked");
    }
    if !flags.is_empty() {
        println!("flags: {}", flags.join(", "));
    }
}
