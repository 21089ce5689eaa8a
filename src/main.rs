use std::ffi::OsString;

use anyhow::{anyhow, Result};

use tile_gen::tile_core::builder::TileBuilder;
use tile_gen::tile_core::config::GenConfig;
use tile_gen::tile_core::export::{self, export_tiles, ExportItem, ExportSink};
use tile_gen::tile_core::materials::MaterialCache;

#[derive(Clone, Debug, Default)]
struct CliArgs {
    seed: Option<i64>,
    count: Option<u32>,
}

impl CliArgs {
    fn from_env_args() -> Result<Self> {
        Self::from_iter(std::env::args_os().skip(1))
    }

    fn from_iter<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut parsed = Self::default();

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            let arg_str = arg.to_string_lossy();
            match arg_str.as_ref() {
                "--seed" | "-s" => {
                    let Some(value) = iter.next() else {
                        return Err(anyhow!("--seed requires a value"));
                    };
                    parsed.seed = Some(value.to_string_lossy().parse()?);
                }
                "--count" | "-c" => {
                    let Some(value) = iter.next() else {
                        return Err(anyhow!("--count requires a value"));
                    };
                    parsed.count = Some(value.to_string_lossy().parse()?);
                }
                _ => {}
            }
        }

        Ok(parsed)
    }
}

/// Stand-in export collaborator: counts what it is handed. Serializing to
/// an actual asset format is the real collaborator's job.
#[derive(Default)]
struct SummarySink {
    items: usize,
}

impl ExportSink for SummarySink {
    type Error = std::convert::Infallible;

    fn write(&mut self, items: &[ExportItem<'_>]) -> Result<(), Self::Error> {
        self.items += items.len();
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::from_env_args()?;
    let mut config = GenConfig::load();
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(count) = args.count {
        config.build_count = count;
    }

    let builder = TileBuilder::from_config(&config)?;
    let mut materials = MaterialCache::new(config.seed as u64);
    let tiles = builder.build_variations(&config.variations, config.build_count, &mut materials)?;

    let mut sink = SummarySink::default();
    for tile in &tiles {
        let origin = export::tile_origin(tile.index, config.hex_radius);
        let items = export::flatten_tile(tile, &materials, origin)?;
        export_tiles(&mut sink, &items)?;
    }

    log::info!(
        "generated {} tiles, {} material variants, {} export items",
        tiles.len(),
        materials.len(),
        sink.items
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use std::ffi::OsString;

    #[test]
    fn no_args_leave_the_config_untouched() {
        let parsed = CliArgs::from_iter(Vec::<OsString>::new()).unwrap();
        assert!(parsed.seed.is_none());
        assert!(parsed.count.is_none());
    }

    #[test]
    fn seed_and_count_are_parsed() {
        let args = vec![
            OsString::from("--seed"),
            OsString::from("7"),
            OsString::from("-c"),
            OsString::from("2"),
        ];
        let parsed = CliArgs::from_iter(args).unwrap();
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.count, Some(2));
    }

    #[test]
    fn missing_values_are_an_error() {
        let args = vec![OsString::from("--seed")];
        assert!(CliArgs::from_iter(args).is_err());
    }
}
