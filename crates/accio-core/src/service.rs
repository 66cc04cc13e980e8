// ── Data loading ──
//
// Turns a `FetchRequest` into a domain `Dataset`: picks the endpoint for
// the tab, converts wire records, cleans character lists and folds every
// transport error into a `FetchFailure`. Stateless apart from the HTTP
// client, so it can be cloned into spawned fetch tasks freely.

use accio_api::{CharacterResponse, Endpoint, HpClient, SpellResponse};
use tracing::{debug, info};

use crate::clean::clean_characters;
use crate::config::ClientConfig;
use crate::controller::FetchRequest;
use crate::error::FetchFailure;
use crate::model::{Character, Dataset, Spell};
use crate::view::Tab;

/// Loads datasets from the HP API.
#[derive(Debug, Clone)]
pub struct DataService {
    client: HpClient,
}

impl DataService {
    /// Build the HTTP stack described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, accio_api::Error> {
        let client = HpClient::new(config.base_url.clone(), &config.transport())?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn from_client(client: HpClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &HpClient {
        &self.client
    }

    /// Perform a fetch requested by the controller.
    pub async fn fetch(&self, request: FetchRequest) -> Result<Dataset, FetchFailure> {
        debug!(generation = request.generation, tab = %request.tab, "fetching");
        self.load(request.tab).await
    }

    /// Load the full dataset backing `tab`.
    pub async fn load(&self, tab: Tab) -> Result<Dataset, FetchFailure> {
        let endpoint = tab.endpoint();
        if endpoint == Endpoint::Spells {
            let raw: Vec<SpellResponse> = self.client.get(endpoint).await?;
            info!(count = raw.len(), "loaded spells");
            return Ok(Dataset::Spells(raw.into_iter().map(Spell::from).collect()));
        }

        let raw: Vec<CharacterResponse> = self.client.get(endpoint).await?;
        let fetched = raw.len();
        let characters = clean_characters(raw.into_iter().map(Character::from));
        info!(
            endpoint = endpoint.path(),
            fetched,
            kept = characters.len(),
            "loaded characters after cleaning"
        );
        Ok(Dataset::Characters(characters))
    }
}
