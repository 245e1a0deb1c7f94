use super::client::{Client, Error};

pub enum Order {
    Ascending,
    Descending,
}

/// Builds the store's filter/order query string: values are percent-encoded,
/// operators (`eq.`, `order=column.direction`) stay literal.
pub struct QueryBuilder<'a> {
    client: &'a Client,
    table: String,
    params: Vec<(String, String)>,
}

impl<'a> QueryBuilder<'a> {
    pub(super) fn new(client: &'a Client, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            params: vec![],
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params
            .push(("select".to_string(), urlencoding::encode(columns).to_string()));
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", urlencoding::encode(value))));
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        let direction = match order {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        };

        self.params
            .push(("order".to_string(), format!("{}.{}", column, direction)));
        self
    }

    fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub async fn fetch(self) -> Result<Vec<serde_json::Value>, Error> {
        self.client
            .fetch_rows(self.table.as_str(), self.query_string())
            .await
    }
}
