use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{Contact, List, NewResource, Page, Params, ValidationError};

const LISTS: &str = "lists";

impl TextMagicClient {
    pub async fn get_list(&self, id: u64) -> Result<List, TextMagicError> {
        self.get(&format!("{LISTS}/{id}"), None).await
    }

    /// Create a list. Accepted parameters: `name` (required), `description`, `shared`.
    pub async fn create_list(&self, params: &Params) -> Result<NewResource, TextMagicError> {
        self.post(LISTS, Some(params)).await
    }

    /// List all lists. Accepted parameters: `page`, `limit`.
    pub async fn get_lists(&self, params: Option<&Params>) -> Result<Page<List>, TextMagicError> {
        self.get(LISTS, params).await
    }

    /// Search lists. Accepted parameters: `page`, `limit`, `ids`, `query`.
    pub async fn search_lists(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<List>, TextMagicError> {
        self.get(&format!("{LISTS}/search"), params).await
    }

    /// Update a list. Accepted parameters: `name` (required), `description`, `shared`.
    pub async fn update_list(
        &self,
        id: u64,
        params: &Params,
    ) -> Result<NewResource, TextMagicError> {
        self.put(&format!("{LISTS}/{id}"), Some(params)).await
    }

    pub async fn delete_list(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{LISTS}/{id}"), None).await
    }

    /// Contacts in a list. Accepted parameters: `page`, `limit`.
    pub async fn get_contacts_in_list(
        &self,
        id: u64,
        params: Option<&Params>,
    ) -> Result<Page<Contact>, TextMagicError> {
        self.get(&format!("{LISTS}/{id}/contacts"), params).await
    }

    /// Assign contacts to a list.
    pub async fn put_contacts_into_list(
        &self,
        id: u64,
        contacts: &[u64],
    ) -> Result<NewResource, TextMagicError> {
        let params = contacts_param(contacts)?;
        self.put(&format!("{LISTS}/{id}/contacts"), Some(&params))
            .await
    }

    /// Remove contacts from a list.
    pub async fn delete_contacts_from_list(
        &self,
        id: u64,
        contacts: &[u64],
    ) -> Result<(), TextMagicError> {
        let params = contacts_param(contacts)?;
        self.delete(&format!("{LISTS}/{id}/contacts"), Some(&params))
            .await
    }
}

fn contacts_param(contacts: &[u64]) -> Result<Params, ValidationError> {
    if contacts.is_empty() {
        return Err(ValidationError::EmptyIdList { field: "contacts" });
    }
    Params::with("contacts", contacts)
}

#[cfg(test)]
mod tests {
    use crate::client::TextMagicError;
    use crate::client::testing::{FakeTransport, form_pairs, make_client};
    use crate::domain::{Params, ValidationError};
    use crate::transport::HttpMethod;

    #[tokio::test]
    async fn get_list_returns_requested_id() {
        let transport = FakeTransport::new(
            200,
            r#"{"id": 4, "name": "VIP", "description": "Best customers", "membersCount": 12, "shared": false}"#,
        );
        let client = make_client(transport.clone());

        let list = client.get_list(4).await.unwrap();
        assert_eq!(list.id, 4);
        assert_eq!(list.description.as_deref(), Some("Best customers"));
        assert_eq!(transport.last_request().url.path(), "/api/v2/lists/4");
    }

    #[tokio::test]
    async fn create_list_posts_form() {
        let transport = FakeTransport::new(201, r#"{"id": 4, "href": "/api/v2/lists/4"}"#);
        let client = make_client(transport.clone());

        let params = Params::with("name", "VIP").unwrap().and("shared", false).unwrap();
        let created = client.create_list(&params).await.unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(
            form_pairs(&transport.last_request()),
            vec![
                ("name".to_owned(), "VIP".to_owned()),
                ("shared".to_owned(), "0".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn put_contacts_into_list_joins_ids() {
        let transport = FakeTransport::new(200, r#"{"id": 4, "href": "/api/v2/lists/4"}"#);
        let client = make_client(transport.clone());

        client.put_contacts_into_list(4, &[1, 2, 3]).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url.path(), "/api/v2/lists/4/contacts");
        assert_eq!(
            form_pairs(&request),
            vec![("contacts".to_owned(), "1,2,3".to_owned())]
        );
    }

    #[tokio::test]
    async fn delete_contacts_from_list_sends_ids_in_body() {
        let transport = FakeTransport::new(204, "");
        let client = make_client(transport.clone());

        client.delete_contacts_from_list(4, &[7, 8]).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(
            form_pairs(&request),
            vec![("contacts".to_owned(), "7,8".to_owned())]
        );
    }

    #[tokio::test]
    async fn contact_id_lists_must_not_be_empty() {
        let transport = FakeTransport::empty();
        let client = make_client(transport.clone());

        let err = client.put_contacts_into_list(4, &[]).await.unwrap_err();
        assert!(matches!(
            err,
            TextMagicError::Validation(ValidationError::EmptyIdList { field: "contacts" })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn delete_list_rejects_non_204_success() {
        let client = make_client(FakeTransport::new(200, r#"{"id": 4}"#));
        let err = client.delete_list(4).await.unwrap_err();
        assert!(matches!(
            err,
            TextMagicError::UnexpectedStatus {
                expected: 204,
                actual: 200
            }
        ));
    }

    #[tokio::test]
    async fn search_lists_and_contacts_in_list_decode_pages() {
        let transport = FakeTransport::new(
            200,
            r#"{"page": 1, "limit": 10, "pageCount": 1, "resources": [{"id": 4, "name": "VIP"}]}"#,
        );
        transport.push(
            200,
            r#"{"page": 1, "limit": 10, "pageCount": 1, "resources": [{"id": 31, "phone": "447860021130"}]}"#,
        );
        let client = make_client(transport.clone());

        let query = Params::with("query", "vip").unwrap();
        let lists = client.search_lists(Some(&query)).await.unwrap();
        let contacts = client.get_contacts_in_list(4, None).await.unwrap();
        assert_eq!(lists.resources[0].name, "VIP");
        assert_eq!(contacts.resources[0].id, 31);

        let requests = transport.requests();
        assert_eq!(requests[0].url.path(), "/api/v2/lists/search");
        assert_eq!(requests[1].url.path(), "/api/v2/lists/4/contacts");
    }
}
