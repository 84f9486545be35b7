use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Response type for the health check endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Executive summary with the dashboard's headline KPIs
///
/// The overview block is extracted from generated CSV reports on the backend,
/// so its values arrive as whatever the report emitted (number or string) and
/// may be `null` when a metric is missing from the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub overview: SummaryOverview,
    pub customer_metrics: CustomerMetrics,
    pub product_metrics: ProductMetrics,
    pub temporal_metrics: TemporalMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOverview {
    pub total_transactions: Option<JsonValue>,
    pub total_products_sold: Option<JsonValue>,
    pub unique_products: Option<JsonValue>,
    pub unique_customers: Option<JsonValue>,
    pub avg_products_per_transaction: Option<JsonValue>,
    pub analysis_period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerMetrics {
    pub avg_transactions_per_customer: f64,
    pub recurring_customers_pct: f64,
    pub avg_days_between_purchases: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetrics {
    pub total_categories: u32,
    pub top_20_products_share: f64,
    pub pareto_80_20: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalMetrics {
    pub avg_daily_transactions: f64,
    pub peak_day: String,
    pub analysis_days: u32,
}

/// Temporal analysis bundle (daily, weekly, monthly, weekday sales)
///
/// Row sets are CSV-derived records whose columns depend on the generated
/// report, so rows stay as raw JSON objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalAnalysis {
    #[serde(rename = "ventas_diarias")]
    pub daily_sales: Vec<JsonValue>,
    #[serde(rename = "ventas_semanales")]
    pub weekly_sales: Vec<JsonValue>,
    #[serde(rename = "ventas_mensuales")]
    pub monthly_sales: Vec<JsonValue>,
    #[serde(rename = "ventas_dia_semana")]
    pub weekday_sales: Vec<JsonValue>,
}

/// Customer analysis bundle (RFM segmentation, frequency, purchase cadence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAnalysis {
    #[serde(rename = "segmentacion_clientes")]
    pub customer_segments: Vec<JsonValue>,
    #[serde(rename = "frecuencia_clientes")]
    pub customer_frequency: Vec<JsonValue>,
    #[serde(rename = "tiempo_entre_compras")]
    pub time_between_purchases: Vec<JsonValue>,
}

/// Product analysis bundle (top products, co-occurrence, association rules)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAnalysis {
    #[serde(rename = "top_productos")]
    pub top_products: Vec<JsonValue>,
    #[serde(rename = "productos_top_detallado")]
    pub top_products_detail: Vec<JsonValue>,
    #[serde(rename = "productos_coocurrencia")]
    pub product_cooccurrence: Vec<JsonValue>,
    #[serde(rename = "reglas_asociacion")]
    pub association_rules: Vec<JsonValue>,
    #[serde(rename = "product_category_summary")]
    pub category_summary: Vec<CategorySummary>,
}

/// Product count per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
    #[serde(rename = "categoria_nombre")]
    pub category_name: String,
    #[serde(rename = "total_productos")]
    pub total_products: i64,
}

/// Transaction statistics bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionStats {
    pub transactions_summary: Vec<JsonValue>,
    #[serde(rename = "stats_por_tipo_transaccion")]
    pub stats_by_transaction_type: Vec<JsonValue>,
    #[serde(rename = "productos_por_transaccion")]
    pub products_per_transaction: Vec<JsonValue>,
}

/// One recommended product, scored from the mined association rules
///
/// `based_on_product` is only present on per-customer recommendations,
/// `num_transactions` only on per-product ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    pub lift: f64,
    #[serde(rename = "confianza")]
    pub confidence: f64,
    #[serde(rename = "soporte")]
    pub support: f64,
    pub score: f64,
    #[serde(rename = "basado_en_producto", default)]
    pub based_on_product: Option<i64>,
    #[serde(rename = "num_transacciones", default)]
    pub num_transactions: Option<i64>,
}

/// Purchase-history stats attached to per-customer recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerStats {
    pub num_transactions: i64,
    pub total_products_bought: i64,
    pub unique_products: Vec<i64>,
}

/// Recommendations for one customer
///
/// An unknown customer comes back with a `message` and an empty
/// recommendation list rather than an error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecommendations {
    pub customer_id: i64,
    #[serde(default)]
    pub customer_stats: Option<CustomerStats>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub total_recommendations: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Sales stats attached to per-product recommendations
///
/// The backend emits an empty object when the product is missing from the
/// top-products report, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductStats {
    #[serde(rename = "frecuencia", default)]
    pub frequency: Option<i64>,
    #[serde(rename = "porcentaje", default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub ranking: Option<i64>,
}

/// Products frequently bought together with one product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecommendations {
    pub product_id: i64,
    #[serde(default)]
    pub product_stats: Option<ProductStats>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub total_recommendations: Option<u32>,
    #[serde(default)]
    pub based_on_rules: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Listing of generated chart images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageListing {
    pub images: Vec<String>,
    pub count: usize,
}

/// Listing of generated CSV report files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvListing {
    pub files: Vec<String>,
    pub count: usize,
}
