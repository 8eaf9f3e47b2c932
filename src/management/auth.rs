use crate::{
    error::{AuthError, StoreError, TokenError},
    spotify::auth::AuthClient,
    store::CredentialStore,
    types::TokenResponse,
    warning,
};

/// Authentication state of the relay.
///
/// REFRESHING is deliberately not a variant: a refresh exchange runs inside
/// the manager's critical section, so every concurrent caller blocks on the
/// lock and only ever observes the outcome of the transition.
#[derive(Debug, Clone)]
pub enum Session {
    Unauthenticated,
    Authenticated { access_token: String },
}

/// Owns the credential pair and drives every transition between the
/// authentication states.
///
/// The access token is an ephemeral in-memory cache, re-derivable from the
/// refresh token at any time; the refresh token is the durable root of
/// trust and every rotation of it goes through the store. The manager is
/// shared behind a `tokio::sync::Mutex`, which serializes refresh exchanges
/// and store writes.
pub struct TokenManager {
    session: Session,
    refresh_token: Option<String>,
    // Bumped on every credential replacement. Callers that saw a 401 report
    // the generation they used; a refresh only goes upstream if no newer
    // credential exists yet, so N concurrent expiry observers cost one
    // exchange instead of N.
    generation: u64,
    auth: AuthClient,
    store: CredentialStore,
}

impl TokenManager {
    /// Restores the manager from the credential store.
    ///
    /// The access token is always absent after a restart; only the refresh
    /// token survives, and it is loaded before the server accepts traffic.
    pub async fn restore(auth: AuthClient, store: CredentialStore) -> Result<Self, StoreError> {
        let refresh_token = store.load().await?;
        Ok(TokenManager {
            session: Session::Unauthenticated,
            refresh_token,
            generation: 0,
            auth,
            store,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// Exchanges a one-time authorization code for the credential pair.
    ///
    /// Exactly one upstream exchange per call. The code is single-use, so a
    /// failed exchange is surfaced to the caller instead of retried, and the
    /// session is left as it was.
    pub async fn authorize(&mut self, code: &str) -> Result<(), TokenError> {
        let token = self.auth.exchange_code(code).await?;
        self.adopt(token).await;
        Ok(())
    }

    /// Returns a usable access token together with its generation.
    ///
    /// When only a refresh token is in memory (fresh start with a stored
    /// credential) this performs exactly one refresh exchange first.
    pub async fn acquire(&mut self) -> Result<(String, u64), AuthError> {
        if let Session::Authenticated { access_token } = &self.session {
            return Ok((access_token.clone(), self.generation));
        }
        self.refresh().await
    }

    /// Refreshes after a caller observed expiry of generation `seen`.
    ///
    /// If the credential was already replaced in the meantime the current
    /// one is returned without touching the upstream.
    pub async fn refresh_stale(&mut self, seen: u64) -> Result<(String, u64), AuthError> {
        if self.generation != seen {
            if let Session::Authenticated { access_token } = &self.session {
                return Ok((access_token.clone(), self.generation));
            }
        }
        self.refresh().await
    }

    async fn refresh(&mut self) -> Result<(String, u64), AuthError> {
        let Some(refresh_token) = self.refresh_token.clone() else {
            return Err(AuthError::NoCredential);
        };

        // The stored refresh token outlives a failed exchange; a transient
        // upstream error must not cost the user a re-authorization.
        let token = self
            .auth
            .refresh_token(&refresh_token)
            .await
            .map_err(AuthError::Refresh)?;

        let access_token = self.adopt(token).await;
        Ok((access_token, self.generation))
    }

    /// Installs a token-endpoint response: replaces the in-memory access
    /// token wholesale and persists a rotated refresh token when one was
    /// issued (absence means the stored one stays valid).
    async fn adopt(&mut self, token: TokenResponse) -> String {
        self.session = Session::Authenticated {
            access_token: token.access_token.clone(),
        };
        self.generation += 1;

        if let Some(rotated) = token.refresh_token {
            self.refresh_token = Some(rotated.clone());
            if let Err(e) = self.store.save(&rotated).await {
                // The in-memory pair is still valid; the degraded case costs
                // one re-authentication after a restart.
                warning!("Failed to persist refresh token: {}", e);
            }
        }

        token.access_token
    }
}
