use mealsu_client::ApiClient;
use mealsu_db::{LocalStorage, keys};
use temp_dir::TempDir;
use wiremock::MockServer;

pub struct TestClient {
    pub server: MockServer,
    pub client: ApiClient,
    pub storage: LocalStorage,
    _dir: TempDir,
}

impl TestClient {
    #[allow(dead_code)]
    pub async fn login_as(&self, token: &str) -> anyhow::Result<()> {
        self.storage.set_item(keys::TOKEN, token).await?;
        Ok(())
    }
}

pub async fn setup_test_client() -> anyhow::Result<TestClient> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
    let pool = mealsu_db::create_pool(&url, 1).await?;
    mealsu_db::migrate(&pool).await?;

    let storage = LocalStorage::new(pool);
    let server = MockServer::start().await;
    let client = ApiClient::new(format!("{}/api/v1", server.uri()), storage.clone());

    Ok(TestClient {
        server,
        client,
        storage,
        _dir: dir,
    })
}
