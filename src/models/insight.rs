use derive_getters::Getters;
use derive_new::new;

#[derive(Clone, Debug, Getters, new)]
pub struct MarketInsight {
    title: String,
    summary: String,
    tags: Vec<String>,
}
