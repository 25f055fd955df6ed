//! Demo session against the mock data service.
//!
//! Walks through the dashboard the way a reviewer would: restore the
//! session, sign in, page through content, draft and audit an item, refresh
//! the analysis page, then sign out.

use content_factory::adapters::mock::fixtures::SEEDED_EMAIL;
use content_factory::prelude::*;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("content_factory=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_session(stores: &AppStores) -> Result<()> {
    stores.auth.check_auth().await;
    if let Some(user) = stores.auth.snapshot().user {
        println!("Restored session for {} ({})", user.name, user.email);
    }

    stores.auth.login(SEEDED_EMAIL, "demo-password").await?;
    let auth = stores.auth.snapshot();
    let user = auth.require_user()?;
    println!(
        "Signed in as {} / {} / {}{}",
        user.name,
        user.role,
        user.department,
        if user.is_admin() { " (administrator)" } else { "" }
    );

    let page_size = stores.config.default_page_size;
    stores.content.fetch_contents(1, page_size).await;
    let content = stores.content.snapshot();
    println!(
        "Page {} of content: {} of {} items",
        content.page,
        content.contents.len(),
        content.total
    );
    for item in &content.contents {
        println!("  [{}] {} ({})", item.status.label(), item.title, item.kind.as_str());
    }
    let counts = content.status_counts();
    let summary: Vec<String> = ContentStatus::ALL
        .iter()
        .map(|status| format!("{} {}", status.label(), counts[status]))
        .collect();
    println!("By status: {}", summary.join(", "));
    println!(
        "Awaiting review: {}",
        content.filter_by_status(Some(ContentStatus::Pending)).len()
    );

    stores
        .content
        .create_content(
            ContentDraft::new()
                .with_title("政务服务一网通办上线公告")
                .with_body("全市政务服务事项实现一网通办。")
                .with_tags(vec!["政务服务".to_string()]),
        )
        .await;
    let created = stores.content.snapshot().contents.first().map(|item| item.id.clone());
    if let Some(id) = created {
        stores
            .content
            .update_content(&id, ContentPatch::new().with_status(ContentStatus::Pending))
            .await;
        stores
            .content
            .audit_content(&id, AuditDecision::Approve, &user.name, Some("内容准确".to_string()))
            .await;
        if let Some(item) = stores.content.snapshot().get(&id) {
            println!("Drafted and audited '{}': {}", item.title, item.status.label());
        }
    }

    stores.content.search_contents("政务").await;
    let found = stores.content.snapshot();
    println!("Search '政务' matched {} loaded item(s)", found.total);

    stores.analysis.refresh_all().await;
    let analysis = stores.analysis.snapshot();
    if let Some(stats) = analysis.content_stats {
        println!(
            "Stats: {} total, {} published, {} pending, {} rejected",
            stats.total, stats.published, stats.pending, stats.rejected
        );
        for kind in ContentKind::ALL {
            println!("  {}: {}", kind.as_str(), stats.by_kind.get(kind));
        }
    }
    if let Some(topic) = analysis.hottest_topic() {
        println!("Hottest topic: {} (heat {})", topic.title, topic.heat);
    }
    println!(
        "Engagement over {} days: {} views",
        analysis.user_behaviors.len(),
        analysis.total_views()
    );
    if let Some(day) = analysis.user_behaviors.iter().max_by_key(|day| day.interactions()) {
        println!("Most interactions: {} ({})", day.date, day.interactions());
    }

    stores.auth.logout().await;
    println!("Signed out: {:?}", stores.auth.snapshot().phase());

    Ok(())
}

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("content-factory {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    init_tracing();

    let stores = AppStores::mock_from_env()?;
    let config = &stores.config;
    tracing::info!(
        app = %config.app_name,
        version = %config.version,
        ai_keys = config.has_ai_keys(),
        "Starting demo session"
    );
    println!("{} v{}", config.app_name, config.version);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_session(&stores))
}
