//! Configuração do runner a partir de `.env` e variáveis de ambiente
//!
//! - `QSIM_SEED`: semente do gerador usado pelas medições
//! - `QSIM_LOG`: diretiva do `EnvFilter` (ex.: `qsim_core=trace`)
//! - `QSIM_JSON`: `1`/`true` imprime resultados em JSON
//!
//! Flags da linha de comando têm precedência.

use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::env;

/// Filtro usado quando nem `QSIM_LOG` nem `--log` foram informados
pub const DEFAULT_LOG_FILTER: &str = "warn,qsim=info";

static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Garante que o `.env` foi carregado
#[inline]
pub fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub seed: Option<u64>,
    pub log_filter: String,
    pub json: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl RunnerConfig {
    /// Lê `QSIM_SEED`, `QSIM_LOG` e `QSIM_JSON` (após carregar o `.env`)
    pub fn from_env() -> Self {
        ensure_loaded();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração com uma função de consulta arbitrária
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            seed: lookup("QSIM_SEED").and_then(|v| v.trim().parse().ok()),
            log_filter: lookup("QSIM_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            json: lookup("QSIM_JSON")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.json),
        }
    }

    /// Aplica as flags da linha de comando por cima do ambiente
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        log_filter: Option<String>,
        json: bool,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(filter) = log_filter {
            self.log_filter = filter;
        }
        self.json |= json;
        self
    }

    /// Gerador das medições: semeado quando há semente, entropia do SO caso contrário
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = RunnerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_reads_environment_values() {
        let config = RunnerConfig::from_lookup(lookup(&[
            ("QSIM_SEED", " 42 "),
            ("QSIM_LOG", "qsim_core=trace"),
            ("QSIM_JSON", "TRUE"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_filter, "qsim_core=trace");
        assert!(config.json);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = RunnerConfig::from_lookup(lookup(&[
            ("QSIM_SEED", "not-a-number"),
            ("QSIM_LOG", "  "),
            ("QSIM_JSON", "0"),
        ]));
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_flags_override_environment() {
        let config = RunnerConfig::from_lookup(lookup(&[("QSIM_SEED", "1"), ("QSIM_LOG", "debug")]))
            .with_overrides(Some(7), Some("trace".to_string()), true);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_filter, "trace");
        assert!(config.json);

        let config = RunnerConfig::from_lookup(lookup(&[("QSIM_SEED", "1")]))
            .with_overrides(None, None, false);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = RunnerConfig {
            seed: Some(5),
            ..RunnerConfig::default()
        };
        assert_eq!(config.rng().next_u64(), config.rng().next_u64());
    }
}
