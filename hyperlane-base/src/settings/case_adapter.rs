use config::{ConfigError, Map, Source, Value, ValueKind};
use convert_case::{Case, Casing};
use derive_new::new;
use itertools::Itertools;

/// Re-cases every key of the wrapped source, including the keys of nested
/// tables, so that JSON files and environment variables agree on how a key
/// is spelled.
#[derive(Clone, Debug, new)]
pub struct CaseAdapter<S> {
    inner: S,
    casing: Case,
}

impl<S> CaseAdapter<S> {
    /// Flatten keys to lowercase without separators: `metricsPort` in a file
    /// and `HYP_METRICSPORT` in the environment both become `metricsport`.
    pub fn flat(inner: S) -> Self {
        Self::new(inner, Case::Flat)
    }
}

impl<S> Source for CaseAdapter<S>
where
    S: Source + Clone + Send + Sync + 'static,
{
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        Ok(recase_table(self.inner.collect()?, self.casing))
    }
}

fn recase_table(table: Map<String, Value>, case: Case) -> Map<String, Value> {
    table
        .into_iter()
        .map(|(key, value)| (recase_key(&key, case), recase_value(value, case)))
        .collect()
}

fn recase_value(mut value: Value, case: Case) -> Value {
    match &mut value.kind {
        ValueKind::Table(table) => *table = recase_table(std::mem::take(table), case),
        ValueKind::Array(array) => {
            *array = std::mem::take(array)
                .into_iter()
                .map(|v| recase_value(v, case))
                .collect()
        }
        _ => {}
    }
    value
}

/// Env sources produce dotted paths; each segment is re-cased on its own.
fn recase_key(key: &str, case: Case) -> String {
    key.split('.').map(|s| s.to_case(case)).join(".")
}
