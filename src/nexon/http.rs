use chrono::Local;
use reqwest::{header::HeaderMap, Client};
use tracing::{debug, info, warn};

use crate::{
    cli::types::ids::{AccessId, MatchId, MatchType, SpId},
    core::api_key_header_map,
    nexon::{
        meta::{
            DivisionEntry, Lookup, MatchTypeEntry, MetaEntry, PositionEntry, SeasonEntry,
            SpIdEntry,
        },
        rank::{pages_for_depth, parse_rank_page, RANKERS_PER_PAGE},
        types::{RawMatch, UserInfo, UserLookup},
    },
    Fo4Error, Result, API_KEY_ENV_VAR,
};


/// Base path for the static metadata files.
pub const STATIC_BASE_URL: &str = "https://static.api.nexon.co.kr/fifaonline4/latest";

/// Base path for the authenticated Open API.
pub const API_BASE_URL: &str = "https://api.nexon.co.kr/fifaonline4/v1.0";

/// Official ranking page on the game website.
pub const RANK_PAGE_URL: &str = "https://fifaonline4.nexon.com/datacenter/rank";

/// CDN root for player artwork.
pub const IMAGE_BASE_URL: &str = "https://fo4.dn.nexoncdn.co.kr/live/externalAssets/common";

/// Largest page size accepted by the match list endpoint.
pub const MAX_MATCH_LIMIT: u32 = 100;

fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Upstream locations, overridable so tests can target a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub static_base: String,
    pub api_base: String,
    pub rank_page: String,
    pub image_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            static_base: STATIC_BASE_URL.to_string(),
            api_base: API_BASE_URL.to_string(),
            rank_page: RANK_PAGE_URL.to_string(),
            image_base: IMAGE_BASE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Point every endpoint at one host, keeping the production path layout.
    pub fn with_root(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            static_base: format!("{root}/fifaonline4/latest"),
            api_base: format!("{root}/fifaonline4/v1.0"),
            rank_page: format!("{root}/datacenter/rank"),
            image_base: format!("{root}/live/externalAssets/common"),
        }
    }
}

/// Client for the metadata, user, match and image endpoints.
///
/// Requests are issued one after another; there is no caching or retrying.
#[derive(Debug, Clone)]
pub struct Fo4Client {
    http: Client,
    api_key: Option<String>,
    endpoints: Endpoints,
}

impl Fo4Client {
    /// Build a client. `api_key` is only required for the Open API calls
    /// (`nick_to_id`, `match_ids`, `match_details`).
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let http = Client::builder().user_agent("fo4-stats/0.1").build()?;
        Ok(Self {
            http,
            api_key,
            endpoints: Endpoints::default(),
        })
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let key = self.api_key.as_deref().ok_or_else(|| Fo4Error::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })?;
        api_key_header_map(key)
    }

    /// Fetch one static metadata file into forward/reverse lookup tables.
    pub async fn fetch_meta<E: MetaEntry>(&self) -> Result<Lookup<E::Key>> {
        let url = format!("{}/{}", self.endpoints.static_base, E::KIND.file_name());

        let kind = E::KIND;
        let res = self.http.get(&url).send().await?.error_for_status()?;
        info!(%kind, status = %res.status(), "fetched metadata");

        let entries = res.json::<Vec<E>>().await?;
        Ok(Lookup::from_entries(entries))
    }

    /// Match type codes, e.g. `{30: "리그 친선"}`.
    pub async fn match_types(&self) -> Result<Lookup<u16>> {
        self.fetch_meta::<MatchTypeEntry>().await
    }

    /// Player identifiers, e.g. `{101000001: "데이비드 시먼"}`.
    pub async fn spid_meta(&self) -> Result<Lookup<SpId>> {
        self.fetch_meta::<SpIdEntry>().await
    }

    /// Season (card class) ids, e.g. `{101: "ICON (ICON)"}`.
    pub async fn season_ids(&self) -> Result<Lookup<u32>> {
        self.fetch_meta::<SeasonEntry>().await
    }

    /// Positions, e.g. `{0: "GK"}`.
    pub async fn positions(&self) -> Result<Lookup<u8>> {
        self.fetch_meta::<PositionEntry>().await
    }

    /// Ranked divisions, e.g. `{800: "슈퍼챔피언스"}`.
    pub async fn divisions(&self) -> Result<Lookup<u32>> {
        self.fetch_meta::<DivisionEntry>().await
    }

    /// Nicknames of the top `n` owners on the official ranking page.
    ///
    /// `n` must be a positive multiple of 10.
    pub async fn top_rankers(&self, n: usize) -> Result<Vec<String>> {
        let pages = pages_for_depth(n)?;
        let mut rankers = Vec::with_capacity(n);

        for page in 1..=pages {
            let body = self
                .http
                .get(&self.endpoints.rank_page)
                .query(&[("n4pageno", page)])
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;

            let names = parse_rank_page(&body)?;
            if names.len() < RANKERS_PER_PAGE {
                warn!(page, found = names.len(), "ranking page listed fewer owners than expected");
            }
            rankers.extend(names);
        }

        let mut distinct = rankers.clone();
        distinct.sort();
        distinct.dedup();
        info!(
            at = %now_stamp(),
            distinct = distinct.len(),
            "saved top ranker nicknames"
        );

        Ok(rankers)
    }

    /// Resolve nicknames to account identifiers, one request per nickname.
    pub async fn nick_to_id(&self, nicknames: &[String]) -> Result<UserLookup> {
        let users = self.users(nicknames).await?;
        Ok(users.into_iter().collect())
    }

    /// Raw user records for each nickname, in request order.
    pub async fn users(&self, nicknames: &[String]) -> Result<Vec<UserInfo>> {
        let headers = self.auth_headers()?;
        let url = format!("{}/users", self.endpoints.api_base);
        let mut users = Vec::with_capacity(nicknames.len());

        for nickname in nicknames {
            let user = self
                .http
                .get(&url)
                .headers(headers.clone())
                .query(&[("nickname", nickname)])
                .send()
                .await?
                .error_for_status()?
                .json::<UserInfo>()
                .await?;
            debug!(nickname = %user.nickname, access_id = %user.access_id, "resolved nickname");
            users.push(user);
        }

        Ok(users)
    }

    /// Match ids played by each user, most recent first, concatenated in
    /// `access_ids` order.
    pub async fn match_ids(
        &self,
        access_ids: &[AccessId],
        match_type: MatchType,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<MatchId>> {
        if limit == 0 || limit > MAX_MATCH_LIMIT {
            return Err(Fo4Error::InvalidLimit { limit });
        }
        let headers = self.auth_headers()?;
        let mut match_ids = Vec::new();

        for access_id in access_ids {
            let url = format!("{}/users/{}/matches", self.endpoints.api_base, access_id);
            let ids = self
                .http
                .get(&url)
                .headers(headers.clone())
                .query(&[
                    ("matchtype", match_type.as_u16() as u32),
                    ("offset", offset),
                    ("limit", limit),
                ])
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<MatchId>>()
                .await?;
            match_ids.extend(ids);
        }

        info!(
            at = %now_stamp(),
            users = access_ids.len(),
            from = offset.saturating_add(1),
            to = offset.saturating_add(limit),
            matches = match_ids.len(),
            "saved recent match ids"
        );

        Ok(match_ids)
    }

    /// Full detail of each match, in request order.
    pub async fn match_details(&self, match_ids: &[MatchId]) -> Result<Vec<RawMatch>> {
        let headers = self.auth_headers()?;
        let mut details = Vec::with_capacity(match_ids.len());

        for match_id in match_ids {
            let url = format!("{}/matches/{}", self.endpoints.api_base, match_id);
            let detail = self
                .http
                .get(&url)
                .headers(headers.clone())
                .send()
                .await?
                .error_for_status()?
                .json::<RawMatch>()
                .await?;
            debug!(%match_id, sides = detail.match_info.len(), "fetched match detail");
            details.push(detail);
        }

        Ok(details)
    }

    /// Candidate artwork URLs for a player, most specific first.
    pub fn player_image_urls(&self, sp_id: SpId) -> [String; 4] {
        let base = &self.endpoints.image_base;
        let pid = sp_id.pid();
        [
            format!("{base}/playersAction/p{sp_id}.png"),
            format!("{base}/playersAction/p{pid}.png"),
            format!("{base}/players/p{sp_id}.png"),
            format!("{base}/players/p{pid}.png"),
        ]
    }

    /// PNG bytes of the player's action shot, falling back to the portrait.
    ///
    /// Some players have no artwork at all, in which case `None` is returned.
    pub async fn player_action_image(&self, sp_id: SpId) -> Result<Option<Vec<u8>>> {
        for url in self.player_image_urls(sp_id) {
            let res = self.http.get(&url).send().await?;
            if res.status().is_success() {
                debug!(%sp_id, %url, "found player image");
                return Ok(Some(res.bytes().await?.to_vec()));
            }
        }

        warn!(%sp_id, "no image exists for this player");
        Ok(None)
    }
}
