use tc_config::ThreadCatchConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ThreadCatchConfig> {
    let mut config = ThreadCatchConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut ThreadCatchConfig, flags: &GlobalFlags) {
    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
    }
    if let Some(customer) = &flags.customer {
        config.session.customer_id.clone_from(customer);
    }
}
