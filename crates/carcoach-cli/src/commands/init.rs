//! The `carcoach init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("carcoach.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("data").context("failed to create data directory")?;
    write_if_missing(Path::new("data/car_facts.txt"), SAMPLE_FACTS)?;
    write_if_missing(Path::new("data/quiz_bank.txt"), SAMPLE_QUIZ_BANK)?;

    println!("\nNext steps:");
    println!("  1. Browse topics:   carcoach facts");
    println!("  2. Take the quiz:   carcoach quiz --name <you> --level easy");
    println!("  3. Price a loan:    carcoach loan --price 25000 --deposit 5000 --rate 6 --years 5");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# carcoach configuration

[data]
facts = "data/car_facts.txt"
quiz_bank = "data/quiz_bank.txt"
scores = "data/quiz_results.txt"
"#;

const SAMPLE_FACTS: &str = "\
Tyre pressure|Check tyre pressure at least once a month, with the tyres cold.
The recommended pressure is on the sticker inside the driver's door, not on the tyre wall.

Engine oil|Oil lubricates and cools the moving parts of the engine.
Check the dipstick with the engine off and the car on level ground.
Most modern cars need an oil change every 10,000 to 15,000 km.

ABS|The anti-lock braking system stops the wheels locking under hard braking.
Keep firm pressure on the pedal; the pulsing you feel is normal.

Dashboard warning lights|Red lights mean stop safely as soon as possible.
Amber lights mean have the car checked soon.
Green and blue lights only tell you a system is on.

Coolant|Coolant keeps the engine at its working temperature.
Never open the radiator cap while the engine is hot.

Timing belt|The timing belt keeps the crankshaft and camshaft in step.
A snapped belt can wreck the engine, so replace it on schedule.

Windscreen wipers|Replace wiper blades when they smear or chatter.
Top up washer fluid with a proper screen wash, not plain water.

Blind spot|The area around the car that mirrors do not show.
Always check over your shoulder before changing lanes.
";

const SAMPLE_QUIZ_BANK: &str = "\
# level|question|option A|option B|option C|option D|answer
easy|What does a solid red traffic light mean?|Go if clear|Stop|Slow down|Sound the horn|B
easy|Which pedal is the brake in an automatic car?|The left pedal|The right pedal|There is no brake pedal|A
easy|What should you do before changing lanes?|Speed up|Check mirrors and blind spot|Flash your lights|Brake hard|B
easy|What shape is a stop sign?|Circle|Triangle|Octagon|Square|C
easy|When must you wear a seat belt?|Only on highways|Only at night|Whenever the car is moving|Only as the driver|C
easy|What does a flashing amber light mean?|Stop and wait|Proceed with caution|Speed up|Turn off your engine|B
medium|What is the safe following distance in good conditions?|One second|Two to three seconds|Half a second|Ten seconds|B
medium|Who gives way at an uncontrolled intersection?|The faster car|The car on the left gives way to the right|Nobody|The larger vehicle|B
medium|When should you use fog lights?|Whenever it is dark|When visibility is seriously reduced|In tunnels|When parking|B
medium|What does a yellow diamond sign usually indicate?|A warning|A speed limit|A parking zone|A toll road|A
medium|What should you do if your car starts to skid?|Brake hard|Steer into the skid and ease off the accelerator|Accelerate|Turn the engine off|B
hard|What is the main purpose of a roundabout's give-way rule?|Give way to vehicles already on the roundabout|Give way to vehicles entering|Give way to trucks only|Nothing|A
hard|What does a solid white line in the centre of the road mean?|Overtaking allowed|No overtaking|Bus lane|Parking allowed|B
hard|How does aquaplaning happen?|Tyres lose contact with the road on a film of water|The engine floods|The brakes overheat|The windscreen fogs up|A
hard|What should you do when an emergency vehicle approaches with sirens?|Keep going|Stop in the middle of the lane|Move aside safely and let it pass|Follow it closely|C
hard|What increases stopping distance the most?|Dry roads|Higher speed|New tyres|Daylight|B
";
