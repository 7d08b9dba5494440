use name_box_core::model::blind_box::BlindBoxSession;
use name_box_core::model::prompt::{image_prompt, ImageStyle};
use name_box_core::model::report::{GeneratedBox, Rarity};
use name_box_core::model::selection::{symbol_library, SymbolSelection};
use name_box_core::{CombinationGenerator, Lexicon, NameAnalyzer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();

    // The built-in lexicon; 'Lexicon::new("./data/names.dat")' loads a custom one
    // (and writes a compiled 'names.bin' next to it)
    let analyzer = NameAnalyzer::new(Lexicon::default());

    // Each character feeds list 1 (even position) or list 2 (odd position).
    // Short lists are topped up with generic imagery.
    for name in ["张三", "王丽明", "Luna", ""] {
        let options = analyzer.analyze(name);
        println!("'{}' -> {:?} | {:?}", name, options.element1_options, options.element2_options);
    }

    // Build a pair: one symbol from the name, one from the fixed library
    let options = analyzer.analyze("林晨");
    let mut selection = SymbolSelection::new();
    selection.toggle(&options.element1_options[0]);
    selection.toggle(symbol_library()[2].symbols[0]);

    // A third toggle replaces the oldest symbol
    selection.toggle("星空");
    let (symbol1, symbol2) = selection.pair().ok_or("Selection should hold two symbols")?;

    for style in [None, Some(ImageStyle::Watercolor)] {
        println!("Prompt: {}", image_prompt(symbol1, symbol2, style));
    }

    // Report boxes: ranked rarity, or random rarity for a fresh box
    for rank in 1..=3 {
        println!("Box {} rarity: {}", rank, Rarity::for_rank(rank));
    }
    let mut generated = GeneratedBox::new("demo", symbol1, symbol2, &mut rng);
    generated.open()?;
    println!("[{}] {} - {}", generated.rarity, generated.title(), generated.analysis);

    // Offline blind box: 40% curated, 60% random pairs of distinct elements
    let generator = CombinationGenerator::default();
    let mut session = BlindBoxSession::new();
    for round in 1..=3 {
        session.shake(&generator, &mut rng)?;
        let combination = session.open()?;
        println!(
            "Round {}: {} {} ({}){}",
            round,
            combination.emoji,
            combination.name,
            combination.description,
            if combination.is_random() { "" } else { " [curated]" }
        );
        session.reset();
    }

    // Opening a closed box is refused
    match session.open() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    Ok(())
}
