use linfa_crossval::prelude::*;
use linfa_crossval_datasets::generate;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SmallRng::seed_from_u64(42);

    println!("separation | folds | out-of-fold accuracy");
    for &separation in &[0.5, 1.0, 2.0, 4.0] {
        let dataset = generate::two_gaussians(100, separation, 1.0, &mut rng)
            .map_err(|e| Error::Parameters(e.to_string()))?
            .shuffle(&mut rng);

        for &nfolds in &[2, 5, 10] {
            let result = CrossValidator::params()
                .nfolds(nfolds)
                .seed(42)
                .parallel(true)
                .run(&dataset, &NearestCentroid)?;

            let correct = result
                .scores
                .iter()
                .zip(dataset.targets.iter())
                .filter(|(score, &label)| (**score > 0.) == label)
                .count();

            println!(
                "{:>10} | {:>5} | {:.3}",
                separation,
                nfolds,
                correct as f64 / dataset.nsamples() as f64
            );
        }
    }

    Ok(())
}
