use super::{ClaimEntry, Principal, USER_GROUPS};
use crate::graph::client::GraphClient;
use crate::graph::group::Group;
use crate::graph::GraphError;
use async_trait::async_trait;
use itertools::Itertools;
use log::debug;

/// Where group membership comes from.
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    async fn user_groups(&self, user_id: &str) -> Result<Vec<Group>, GraphError>;
}

#[async_trait]
impl GroupDirectory for GraphClient {
    async fn user_groups(&self, user_id: &str) -> Result<Vec<Group>, GraphError> {
        self.get_user_groups(user_id).await
    }
}

/// Copies the caller's claims and, when the object id claim is present,
/// appends one `USER_GROUPS` claim holding the space-joined group names.
pub async fn render_claims<D>(
    principal: &Principal,
    directory: &D,
) -> Result<Vec<ClaimEntry>, GraphError>
where
    D: GroupDirectory + ?Sized,
{
    let mut model = principal.claims.clone();

    match principal.object_id() {
        Some(user_id) => {
            let groups = directory.user_groups(user_id).await?;
            debug!("{user_id} is in {} groups", groups.len());
            let aggregated = groups.iter().map(|group| &group.display_name).join(" ");
            model.push(ClaimEntry::new(USER_GROUPS, aggregated));
        }
        None => debug!("No object id claim, skipping group lookup"),
    }

    Ok(model)
}
