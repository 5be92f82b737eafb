use hamming_fec::ecc::{build_code, build_extended_code, render_word};
use hamming_fec::{simulate, CodeKind, SimulationConfig};

fn main() {
    let config = SimulationConfig {
        size_parameter: 3,
        interleaving_depth: 8,
        prob_of_error: 0.5,
        prob_good_to_bad: 0.2,
        prob_bad_to_good: 0.6,
        code: CodeKind::Extended,
    };

    let code = match build_code(config.size_parameter) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    println!("Parity check matrix:\n{}", code.parity_check());
    println!("Generator matrix:\n{}", code.generator());

    if let Ok(extended) = build_extended_code(config.size_parameter) {
        println!("Extended parity check matrix:\n{}", extended.parity_check());
    }

    match simulate(&config, 2024) {
        Ok(report) => {
            println!("Generated:\n{}", report.sent);
            println!("Received:\n{}", report.received);
            println!("Decoded:");
            for decoded in &report.decoded {
                println!("{}    {:?}", render_word(&decoded.source), decoded.outcome);
            }
            println!(
                "\n{} of {} words recovered, {} corrected, {} uncorrectable, {} miscorrected",
                report.words_recovered,
                report.sources.len(),
                report.words_corrected,
                report.words_uncorrectable,
                report.words_miscorrected
            );
            println!(
                "{} of {} bits flipped by the channel",
                report.channel.bits_flipped, report.channel.bits_sent
            );
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
