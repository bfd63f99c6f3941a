//! Fixtures shared by the HTTP integration tests: synthetic data, seeding,
//! teardown, and app construction.

#![allow(dead_code)]

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use api_server::state::AppState;
use blog_core::domain::{Author, BlogPost, NewBlogPost};
use blog_core::ports::BlogPostRepository;
use blog_infra::database::InMemoryBlogPostRepository;
use blog_shared::dto::{AuthorDto, CreateBlogPostRequest};

/// Records seeded before every scenario.
pub const SEED_COUNT: usize = 10;

pub const DEFAULT_TEST_DATABASE_URL: &str = "postgres://localhost/blog-app-test";

const ADJECTIVES: &[&str] = &[
    "Adaptive", "Balanced", "Cloned", "Decentralized", "Enhanced", "Focused", "Grass-roots",
    "Horizontal", "Intuitive", "Managed", "Networked", "Optimized", "Proactive", "Reactive",
    "Seamless", "Synergized", "Universal", "Vision-oriented",
];

const DESCRIPTORS: &[&str] = &[
    "24/7", "asynchronous", "bi-directional", "client-driven", "dynamic", "executive",
    "heuristic", "interactive", "local", "multi-tasking", "next generation", "real-time",
    "secondary", "tertiary", "user-facing", "zero defect",
];

const NOUNS: &[&str] = &[
    "ability", "algorithm", "architecture", "benchmark", "capability", "database", "framework",
    "hub", "initiative", "matrix", "middleware", "paradigm", "portal", "solution", "toolset",
    "workforce",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "John",
    "Katherine", "Ken", "Leslie", "Margaret", "Niklaus", "Radia", "Tim", "Xavier",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Berners-Lee", "Dijkstra", "Hamilton", "Hopper", "Johnson", "Knuth", "Lamarr",
    "Lamport", "Liskov", "Lovelace", "McCarthy", "Perlman", "Ritchie", "Shannon", "Thompson",
    "Turing", "Wirth",
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat",
];

fn pick(rng: &mut impl Rng, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or("lorem")
}

fn catch_phrase(rng: &mut impl Rng) -> String {
    format!(
        "{} {} {}",
        pick(rng, ADJECTIVES),
        pick(rng, DESCRIPTORS),
        pick(rng, NOUNS)
    )
}

fn lorem_paragraph(rng: &mut impl Rng) -> String {
    let sentences = rng.gen_range(3..=6);
    (0..sentences)
        .map(|_| {
            let len = rng.gen_range(4..=10);
            let words: Vec<&str> = (0..len).map(|_| pick(rng, LOREM)).collect();
            let sentence = words.join(" ");
            let mut chars = sentence.chars();
            match chars.next() {
                Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One random post: catch-phrase title, random author, lorem paragraph.
pub fn generate_blog_post_data() -> NewBlogPost {
    let mut rng = rand::thread_rng();
    NewBlogPost {
        title: catch_phrase(&mut rng),
        author: Author::new(pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES)),
        content: lorem_paragraph(&mut rng),
    }
}

pub fn create_request(fields: &NewBlogPost) -> CreateBlogPostRequest {
    CreateBlogPostRequest {
        title: fields.title.clone(),
        author: AuthorDto {
            first_name: fields.author.first_name.clone(),
            last_name: fields.author.last_name.clone(),
        },
        content: fields.content.clone(),
    }
}

pub async fn seed_blog_post_data(repo: &dyn BlogPostRepository) -> Vec<BlogPost> {
    tracing::info!("Seeding blog post data");
    let data = (0..SEED_COUNT).map(|_| generate_blog_post_data()).collect();
    repo.insert_many(data).await.expect("seeding failed")
}

pub async fn tear_down_db(repo: &dyn BlogPostRepository) {
    tracing::warn!("Deleting database");
    repo.drop_all().await.expect("teardown failed");
}

/// A seeded store plus the app state wrapping it.
pub struct TestContext {
    pub state: AppState,
    pub seeded: Vec<BlogPost>,
}

impl TestContext {
    pub async fn in_memory() -> Self {
        let state = AppState::with_repository(Arc::new(InMemoryBlogPostRepository::new()), None);
        Self::seeded(state).await
    }

    /// Connects to `TEST_DATABASE_URL`, applies migrations, and starts from an empty table.
    #[cfg(feature = "postgres")]
    pub async fn postgres() -> Self {
        use std::time::Duration;

        use blog_infra::database::{DatabaseConfig, DatabaseConnections, PostgresBlogPostRepository};
        use migration::{DbErr, Migrator, MigratorTrait};

        let url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_TEST_DATABASE_URL.to_string());
        let config = DatabaseConfig::new(url);

        let connections = tokio::time::timeout(Duration::from_secs(5), async {
            let connections = DatabaseConnections::init(&config).await?;
            Migrator::up(connections.conn(), None).await?;
            Ok::<_, DbErr>(connections)
        })
        .await
        .expect("database startup timed out")
        .expect("database startup failed");

        let connections = Arc::new(connections);
        let repo = Arc::new(PostgresBlogPostRepository::new(Arc::clone(
            &connections.main,
        )));
        let state = AppState::with_repository(repo, Some(connections));

        tear_down_db(state.posts.as_ref()).await;
        Self::seeded(state).await
    }

    async fn seeded(state: AppState) -> Self {
        let seeded = seed_blog_post_data(state.posts.as_ref()).await;
        Self { state, seeded }
    }

    pub fn repo(&self) -> &dyn BlogPostRepository {
        self.state.posts.as_ref()
    }

    pub async fn teardown(&self) {
        tear_down_db(self.repo()).await;
    }

    /// Teardown followed by a fresh seed.
    pub async fn reseed(&mut self) {
        self.teardown().await;
        self.seeded = seed_blog_post_data(self.repo()).await;
    }
}

/// Build the service under test around a state.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(api_server::handlers::configure_routes),
        )
        .await
    };
}
