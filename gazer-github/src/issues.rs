//! Open-issue listing with cursor pagination and page merging

use crate::{Error, GitHubClient, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};

/// Query for a repository's open issues, newest page of reactions included
const OPEN_ISSUES_QUERY: &str = r#"
    query($owner: String!, $name: String!, $cursor: String, $pageSize: Int!) {
        organization(login: $owner) {
            id
            name
            url
            repository(name: $name) {
                id
                name
                url
                stargazers {
                    totalCount
                }
                viewerHasStarred
                issues(first: $pageSize, after: $cursor, states: [OPEN]) {
                    edges {
                        node {
                            id
                            title
                            url
                            reactions(last: 3) {
                                edges {
                                    node {
                                        id
                                        content
                                    }
                                }
                            }
                        }
                    }
                    totalCount
                    pageInfo {
                        endCursor
                        hasNextPage
                    }
                }
            }
        }
    }
"#;

/// Organization that owns the queried repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Node id
    pub id: String,
    /// Organization display name
    pub name: String,
    /// Organization URL
    pub url: String,
    /// The queried repository
    pub repository: Repository,
}

/// Repository with star state and accumulated open issues
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Node id, the starrable id for mutations
    pub id: String,
    /// Repository name
    pub name: String,
    /// Repository URL
    pub url: String,
    /// Stargazer count
    pub stargazers: StargazerCount,
    /// Whether the authenticated viewer has starred this repository
    pub viewer_has_starred: bool,
    /// Open issues fetched so far
    pub issues: IssueConnection,
}

/// Stargazer count wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StargazerCount {
    /// Total stargazers
    pub total_count: u64,
}

/// Paginated issue connection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueConnection {
    /// Issue edges accumulated across pages
    pub edges: Vec<IssueEdge>,
    /// Total number of open issues in the repository
    pub total_count: u64,
    /// Pagination state of the most recent page
    pub page_info: PageInfo,
}

/// Edge wrapping a single issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueEdge {
    /// The issue
    pub node: Issue,
}

/// A single open issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Node id
    pub id: String,
    /// Issue title
    pub title: String,
    /// Issue URL
    pub url: String,
    /// The last few reactions on the issue
    pub reactions: ReactionConnection,
}

/// Reaction connection on an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionConnection {
    /// Reaction edges
    pub edges: Vec<ReactionEdge>,
}

/// Edge wrapping a single reaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEdge {
    /// The reaction
    pub node: Reaction,
}

/// A reaction such as THUMBS_UP or HEART
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    /// Node id
    pub id: String,
    /// Reaction content keyword
    pub content: String,
}

/// Cursor pagination state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the last edge in this page
    pub end_cursor: Option<String>,
    /// Whether another page exists after this one
    pub has_next_page: bool,
}

impl Organization {
    /// Merge the next page of issues into the accumulated state
    ///
    /// All organization and repository metadata (star count, `totalCount`,
    /// `pageInfo`) is replaced by the newest page; issue edges are appended
    /// after the edges already fetched, so earlier pages keep their order.
    pub fn merge_page(&mut self, mut next: Organization) {
        let mut edges = std::mem::take(&mut self.repository.issues.edges);
        edges.append(&mut next.repository.issues.edges);
        next.repository.issues.edges = edges;
        *self = next;
    }
}

/// Wire shape of the issues query, with the nullable layers GraphQL allows
#[derive(Debug, Deserialize)]
struct IssuesData {
    organization: Option<RawOrganization>,
}

#[derive(Debug, Deserialize)]
struct RawOrganization {
    id: String,
    name: String,
    url: String,
    repository: Option<Repository>,
}

impl GitHubClient {
    /// Fetch one page of the repository's open issues
    ///
    /// Passing `cursor = None` fetches the first page; passing the previous
    /// page's `end_cursor` fetches the page after it.
    pub async fn fetch_issues(
        &self,
        cursor: Option<&str>,
        page_size: u32,
    ) -> Result<Organization> {
        debug!(owner = %self.owner(), repo = %self.repo(), ?cursor, page_size, "Fetching issues");

        let variables = json!({
            "owner": self.owner(),
            "name": self.repo(),
            "cursor": cursor,
            "pageSize": page_size,
        });

        let data = self
            .graphql::<IssuesData>(OPEN_ISSUES_QUERY, &variables)
            .await?;

        let raw = data
            .organization
            .ok_or_else(|| Error::RepositoryNotFound(self.locator()))?;

        let repository = raw
            .repository
            .ok_or_else(|| Error::RepositoryNotFound(self.locator()))?;

        info!(
            count = repository.issues.edges.len(),
            total = repository.issues.total_count,
            "Fetched issue page"
        );

        Ok(Organization {
            id: raw.id,
            name: raw.name,
            url: raw.url,
            repository,
        })
    }

    /// Fetch every page of open issues, merging them as they arrive
    ///
    /// `max_pages` bounds the number of requests in case the server keeps
    /// reporting `hasNextPage`.
    pub async fn fetch_all_issues(&self, page_size: u32, max_pages: u32) -> Result<Organization> {
        let mut organization = self.fetch_issues(None, page_size).await?;
        let mut pages = 1u32;

        while organization.repository.issues.page_info.has_next_page {
            if pages >= max_pages {
                warn!(pages, max_pages, "Stopping pagination at page limit");
                break;
            }

            let cursor = organization
                .repository
                .issues
                .page_info
                .end_cursor
                .clone()
                .ok_or_else(|| {
                    Error::Parse("hasNextPage set but endCursor missing".to_string())
                })?;

            let next = self.fetch_issues(Some(&cursor), page_size).await?;
            organization.merge_page(next);
            pages += 1;
        }

        info!(
            pages,
            issues = organization.repository.issues.edges.len(),
            "Fetched all issue pages"
        );

        Ok(organization)
    }
}
