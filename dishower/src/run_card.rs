use crate::alphas::Order;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunCard {
    pub nevents: usize,
    pub iseed: u64,
    pub ecms: f64,
    pub shower_t0: f64,
    pub alphas_mz: f64,
    pub mz: f64,
    pub mb: f64,
    pub mc: f64,
    /// 1 or 2 loops.
    pub alphas_order: usize,
    pub run_tag: String,
}

impl Default for RunCard {
    fn default() -> RunCard {
        RunCard {
            nevents: 100_000,
            iseed: 0,
            ecms: 91.2,
            shower_t0: 1.0,
            alphas_mz: 0.118,
            mz: 91.1876,
            mb: 4.75,
            mc: 1.3,
            alphas_order: 1,
            run_tag: "run_01".to_owned(),
        }
    }
}

impl RunCard {
    pub fn new(filename: &str) -> RunCard {
        let f = File::open(filename).expect("Could not open run card");
        let reader = BufReader::new(f);
        serde_yaml::from_reader(reader).expect("Could not read run card")
    }

    pub fn order(&self) -> Order {
        match self.alphas_order {
            1 => Order::OneLoop,
            2 => Order::TwoLoop,
            o => panic!("unsupported alphas_order {} in run card", o),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_setup() {
        let card = RunCard::default();
        assert_eq!(card.order(), Order::OneLoop);
        assert_eq!(card.iseed, 0);
        assert!((card.shower_t0 - 1.0).abs() < 1e-12);
        assert!((card.ecms - 91.2).abs() < 1e-12);
    }

    #[test]
    fn partial_card_falls_back_to_defaults() {
        let card: RunCard = serde_yaml::from_str("nevents: 500\niseed: 7\n").unwrap();
        assert_eq!(card.nevents, 500);
        assert_eq!(card.iseed, 7);
        assert!((card.mb - 4.75).abs() < 1e-12);
    }
}
