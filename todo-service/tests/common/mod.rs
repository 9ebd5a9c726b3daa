#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use serde_json::json;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::Connection;
use sqlx::Executor;
use sqlx::PgConnection;
use sqlx::PgPool;
use serde_json::Value;
use todo_service::domain::item::errors::ItemError;
use todo_service::domain::item::models::Item;
use todo_service::domain::item::models::ItemId;
use todo_service::domain::item::models::ItemStatus;
use todo_service::domain::item::models::ItemTitle;
use todo_service::domain::item::ports::ItemRepository;
use todo_service::domain::item::service::ItemService;
use todo_service::domain::user::errors::UserError;
use todo_service::domain::user::models::EmailAddress;
use todo_service::domain::user::models::UpdateProfileCommand;
use todo_service::domain::user::models::User;
use todo_service::domain::user::ports::UserRepository;
use todo_service::domain::user::service::UserService;
use todo_service::inbound::http::router::create_router;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const PASSWORD: &str = "pass_word!";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub items: Arc<InMemoryItemRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(JWT_SECRET, chrono::Duration::hours(1)));
        let users = Arc::new(InMemoryUserRepository::default());
        let items = Arc::new(InMemoryItemRepository::default());

        let user_service = Arc::new(UserService::new(users, Arc::clone(&authenticator)));
        let item_service = Arc::new(ItemService::new(Arc::clone(&items)));

        let router = create_router(user_service, item_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
            items,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub async fn signup(&self, email: &str) -> reqwest::Response {
        self.post("/signup")
            .json(&json!({
                "firstName": "Test",
                "lastName": "User",
                "email": email,
                "country": "IT",
                "password": PASSWORD
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register `email` and return a session token for it
    pub async fn signup_and_login(&self, email: &str) -> String {
        let response = self.signup(email).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = self
            .login(email, PASSWORD)
            .await
            .json()
            .await
            .expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("login did not return a token")
            .to_string()
    }

    /// Add an item as the token holder and return its id
    pub async fn add_item(&self, token: &str, title: &str) -> String {
        let body: Value = self
            .post_authenticated("/additem", token)
            .json(&json!({ "title": title, "description": "from tests" }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");
        body["item"]["_id"]
            .as_str()
            .expect("additem did not return an item")
            .to_string()
    }

    pub async fn list_items(&self, token: &str) -> Vec<Value> {
        let body: Value = self
            .get_authenticated("/getitems", token)
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");
        body["itemslist"]
            .as_array()
            .cloned()
            .expect("getitems did not return a list")
    }
}

/// Credential store keyed by email; uniqueness is checked under the lock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<EmailAddress, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }

    async fn update_profile(
        &self,
        email: &EmailAddress,
        changes: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        let stored = users
            .get_mut(email)
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;
        changes.apply(&mut stored.profile);
        Ok(stored.clone())
    }
}

/// Item store preserving insertion order.
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Mutex<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn get(&self, id: &str) -> Option<Item> {
        let id = ItemId::from_string(id).ok()?;
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    /// Change one owned item under the lock and return it as stored.
    fn modify(
        &self,
        id: &ItemId,
        owner: &EmailAddress,
        change: impl FnOnce(&mut Item),
    ) -> Result<Item, ItemError> {
        let mut items = self.items.lock().unwrap();
        let stored = items
            .iter_mut()
            .find(|stored| &stored.id == id && &stored.owner == owner)
            .ok_or(ItemError::NotFound(*id))?;
        change(stored);
        Ok(stored.clone())
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: Item) -> Result<Item, ItemError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError> {
        Ok(self.get(&id.to_string()))
    }

    async fn list_by_owner(&self, owner: &EmailAddress) -> Result<Vec<Item>, ItemError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| &item.owner == owner)
            .cloned()
            .collect())
    }

    async fn update_details(
        &self,
        id: &ItemId,
        owner: &EmailAddress,
        title: ItemTitle,
        description: Option<String>,
    ) -> Result<Item, ItemError> {
        self.modify(id, owner, |stored| {
            stored.title = title;
            stored.description = description;
        })
    }

    async fn mark_completed(&self, id: &ItemId, owner: &EmailAddress) -> Result<Item, ItemError> {
        self.modify(id, owner, |stored| stored.status = ItemStatus::Completed)
    }

    async fn delete(&self, id: &ItemId, owner: &EmailAddress) -> Result<(), ItemError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| !(&item.id == id && &item.owner == owner));
        if items.len() == before {
            return Err(ItemError::NotFound(*id));
        }
        Ok(())
    }
}

/// Throwaway Postgres database with migrations applied.
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
    admin_url: String,
}

impl TestDb {
    /// Create a database named after a fresh uuid on the server at
    /// `DATABASE__URL`. Returns `None` when the variable is not set.
    pub async fn new() -> Option<Self> {
        let Ok(admin_url) = std::env::var("DATABASE__URL") else {
            eprintln!("DATABASE__URL not set, skipping Postgres test");
            return None;
        };

        let db_name = format!(
            "test_todo_service_{}",
            uuid::Uuid::new_v4().to_string().replace('-', "_")
        );

        let mut conn = PgConnection::connect(&admin_url)
            .await
            .expect("Failed to connect to Postgres");

        conn.execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
            .await
            .expect("Failed to create test database");

        let options = admin_url
            .parse::<PgConnectOptions>()
            .expect("Failed to parse DATABASE__URL")
            .database(&db_name);

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Some(Self {
            pool,
            db_name,
            admin_url,
        })
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let db_name = self.db_name.clone();
        let admin_url = self.admin_url.clone();
        tokio::spawn(async move {
            if let Ok(mut conn) = PgConnection::connect(&admin_url).await {
                let _ = conn
                    .execute(
                        format!(
                            r#"SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}';"#,
                            db_name
                        )
                        .as_str(),
                    )
                    .await;

                let _ = conn
                    .execute(format!(r#"DROP DATABASE IF EXISTS "{}";"#, db_name).as_str())
                    .await;
            }
        });
    }
}
