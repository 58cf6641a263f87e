// ===== passforge/src/generator.rs =====
use fastrand::Rng;
use rayon::prelude::*;

use crate::charset;
use crate::config::{GeneratorConfig, UnderLengthPolicy};
use crate::error::{PassForgeError, PfResult};

/// Seeded PRNG when a seed is given, entropy-seeded otherwise. Seeded runs
/// reproduce bit-for-bit.
pub fn make_rng(seed: Option<u64>) -> Rng {
    match seed {
        Some(s) => Rng::with_seed(s),
        None => Rng::new(),
    }
}

/// Generates one password from the configuration.
///
/// Every enabled class contributes at least one character whenever the
/// length allows it, the remainder is drawn uniformly from the working
/// alphabet, and the buffer is uniformly shuffled before it is returned.
pub fn generate(config: &GeneratorConfig, rng: &mut Rng) -> PfResult<String> {
    config.validate()?;

    let classes = config.enabled_classes();
    if config.length < classes.len() && config.underlength == UnderLengthPolicy::Reject {
        return Err(PassForgeError::LengthTooShort {
            requested: config.length,
            enabled: classes.len(),
        });
    }

    let working = charset::working_alphabet(&classes, config.exclude_ambiguous);
    let target = config.length.max(classes.len());
    let mut buf: Vec<u8> = Vec::with_capacity(target);

    // 1. Guarantee: one draw from each enabled class, canonical order.
    for class in &classes {
        buf.push(draw(rng, &class.pool(config.exclude_ambiguous)));
    }

    // 2. Fill the remainder from the union of enabled pools.
    while buf.len() < target {
        buf.push(draw(rng, &working));
    }

    // 3. Uniform shuffle so the guaranteed characters do not cluster at
    //    the front.
    rng.shuffle(&mut buf);

    // 4. Trim. Only bites when length < enabled classes under Truncate;
    //    shuffling first keeps the surviving subset unbiased.
    buf.truncate(config.length);

    Ok(String::from_utf8_lossy(&buf).to_string())
}

/// Generates `count` independent passwords in parallel. With a seed,
/// password `i` draws from a PRNG seeded `seed + i` (wrapping at the
/// u64 boundary), so whole batches reproduce; without one each draw
/// self-seeds.
pub fn generate_batch(
    config: &GeneratorConfig,
    count: usize,
    seed: Option<u64>,
) -> PfResult<Vec<String>> {
    config.validate()?;

    (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = make_rng(seed.map(|s| s.wrapping_add(i as u64)));
            generate(config, &mut rng)
        })
        .collect()
}

fn draw(rng: &mut Rng, pool: &[u8]) -> u8 {
    pool[rng.usize(0..pool.len())]
}
