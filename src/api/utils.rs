use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::error::ApiError;

pub async fn get_json(client: &Client, url: &str) -> Result<Value, ApiError> {
    let res = client.get(url).send().await?;

    let status = res.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            endpoint: url.to_string(),
            status,
        });
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

pub fn parse_array<T>(data: Value, context: &str) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => {
            let result: Vec<T> = items
                .into_iter()
                .filter_map(|item| match serde_json::from_value(item) {
                    Ok(parsed) => Some(parsed),
                    Err(err) => {
                        warn!("{}: skipping entry: {}", context, err);
                        None
                    }
                })
                .collect();

            Ok(result)
        }
        _ => Err(ApiError::Shape(format!("{}: expected an array", context))),
    }
}
