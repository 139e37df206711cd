//! Interactive user mode: profile and pains in, recommendation out.

use painrx_core::engine::MAX_REQUEST_PAINS;
use painrx_core::{
    Catalog, InteractionIndex, Outcome, RecommendationReport, Recommender, UserProfile,
};

use crate::prompt;

pub fn run(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    let index = InteractionIndex::build(catalog);
    let recommender = Recommender::new(catalog, &index);

    let age = prompt::read_u32_in("Age (0-99): ", 0, 99)?;
    let is_female = prompt::read_flag("Sex (male: 0, female: 1): ")?;
    let is_pregnant = if is_female {
        prompt::read_flag("Pregnant? (0: no, 1: yes): ")?
    } else {
        false
    };
    let is_heavy_drinker = prompt::read_flag("Three or more drinks a day? (0: no, 1: yes): ")?;
    let profile = UserProfile {
        age,
        is_female,
        is_pregnant,
        is_heavy_drinker,
    };

    let pain_count = prompt::read_u32_in(
        &format!("Number of pains (1-{MAX_REQUEST_PAINS}): "),
        1,
        MAX_REQUEST_PAINS as u32,
    )?;

    println!();
    println!("== Available pains ==");
    print_pain_registry(&catalog.pain_registry());

    let mut pains = Vec::with_capacity(pain_count as usize);
    for i in 0..pain_count {
        pains.push(prompt::read_nonempty(&format!("Pain {}: ", i + 1))?);
    }

    let result = recommender.recommend(&profile, &pains);

    println!();
    println!("== Recommended drugs ==");
    if result.fell_back() {
        println!("No fully consistent combination found, falling back to per-pain picks.");
    }
    for entry in &result.entries {
        match &entry.outcome {
            Outcome::Recommended { drug, reason } => println!("- {drug}: {reason}"),
            Outcome::NoMatch => println!("- none: {}", entry.note()),
        }
    }
    println!("Search time: {:.3}s", result.elapsed.as_secs_f64());

    if json {
        let report = RecommendationReport::from_recommendation(&result);
        println!("{}", report.to_json()?);
    }
    Ok(())
}

/// Print registry tags in four columns.
fn print_pain_registry(tags: &[String]) {
    const COLUMNS: usize = 4;
    for (i, tag) in tags.iter().enumerate() {
        print!("| {tag:<15}");
        if (i + 1) % COLUMNS == 0 || i == tags.len() - 1 {
            println!();
        }
    }
}
