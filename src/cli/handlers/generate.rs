use crate::game::generate;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::CommandContext;
use super::utils::code_pegs;

/// Uses the same draw as a seeded game, so `generate --seed N` reveals the
/// secret of `play --seed N`.
pub fn handle_generate(ctx: &CommandContext, seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let code = generate(ctx.settings.code_length, &ctx.settings.palette, &mut rng);

    if json {
        let out = serde_json::json!({ "secret": code, "seed": seed });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}  {}", code_pegs(&code), code);
    }
    Ok(())
}
