//! Star and unstar mutations with optimistic local updates

use crate::{Error, GitHubClient, Repository, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

const ADD_STAR_MUTATION: &str = r#"
    mutation($id: ID!) {
        addStar(input: {starrableId: $id}) {
            starrable {
                viewerHasStarred
            }
        }
    }
"#;

const REMOVE_STAR_MUTATION: &str = r#"
    mutation($id: ID!) {
        removeStar(input: {starrableId: $id}) {
            starrable {
                viewerHasStarred
            }
        }
    }
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddStarData {
    add_star: Option<StarPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoveStarData {
    remove_star: Option<StarPayload>,
}

#[derive(Debug, Deserialize)]
struct StarPayload {
    starrable: Starrable,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Starrable {
    viewer_has_starred: bool,
}

impl GitHubClient {
    /// Star a repository by its node id
    ///
    /// Returns the server-reported `viewerHasStarred` after the mutation.
    pub async fn add_star(&self, repository_id: &str) -> Result<bool> {
        debug!(repository_id, "Adding star");

        let variables = json!({ "id": repository_id });
        let data = self
            .graphql::<AddStarData>(ADD_STAR_MUTATION, &variables)
            .await?;

        let payload = data.add_star.ok_or(Error::MissingData)?;

        info!(repository_id, "Starred repository");
        Ok(payload.starrable.viewer_has_starred)
    }

    /// Remove the viewer's star from a repository by its node id
    ///
    /// Returns the server-reported `viewerHasStarred` after the mutation.
    pub async fn remove_star(&self, repository_id: &str) -> Result<bool> {
        debug!(repository_id, "Removing star");

        let variables = json!({ "id": repository_id });
        let data = self
            .graphql::<RemoveStarData>(REMOVE_STAR_MUTATION, &variables)
            .await?;

        let payload = data.remove_star.ok_or(Error::MissingData)?;

        info!(repository_id, "Unstarred repository");
        Ok(payload.starrable.viewer_has_starred)
    }
}

impl Repository {
    /// Apply the result of a star mutation to the local repository state
    ///
    /// Sets the flag and adjusts the stargazer count by one in the matching
    /// direction. A no-op when the flag did not actually change, so replayed
    /// responses cannot drift the count.
    pub fn apply_star(&mut self, viewer_has_starred: bool) {
        if self.viewer_has_starred == viewer_has_starred {
            return;
        }

        self.viewer_has_starred = viewer_has_starred;
        if viewer_has_starred {
            self.stargazers.total_count += 1;
        } else {
            self.stargazers.total_count = self.stargazers.total_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IssueConnection, PageInfo, StargazerCount};

    fn repository(starred: bool, count: u64) -> Repository {
        Repository {
            id: "R_1".to_string(),
            name: "hello-world".to_string(),
            url: "https://github.com/octo/hello-world".to_string(),
            stargazers: StargazerCount { total_count: count },
            viewer_has_starred: starred,
            issues: IssueConnection {
                edges: vec![],
                total_count: 0,
                page_info: PageInfo {
                    end_cursor: None,
                    has_next_page: false,
                },
            },
        }
    }

    #[test]
    fn test_apply_star_increments() {
        let mut repo = repository(false, 42);
        repo.apply_star(true);
        assert!(repo.viewer_has_starred);
        assert_eq!(repo.stargazers.total_count, 43);
    }

    #[test]
    fn test_apply_unstar_decrements() {
        let mut repo = repository(true, 43);
        repo.apply_star(false);
        assert!(!repo.viewer_has_starred);
        assert_eq!(repo.stargazers.total_count, 42);
    }

    #[test]
    fn test_apply_star_idempotent() {
        let mut repo = repository(true, 43);
        repo.apply_star(true);
        repo.apply_star(true);
        assert_eq!(repo.stargazers.total_count, 43);
    }

    #[test]
    fn test_apply_unstar_saturates_at_zero() {
        let mut repo = repository(true, 0);
        repo.apply_star(false);
        assert_eq!(repo.stargazers.total_count, 0);
    }

    #[test]
    fn test_deserialize_add_star_payload() {
        let body = serde_json::json!({
            "addStar": {
                "starrable": { "viewerHasStarred": true }
            }
        });

        let data: AddStarData = serde_json::from_value(body).unwrap();
        assert!(data.add_star.unwrap().starrable.viewer_has_starred);
    }
}
