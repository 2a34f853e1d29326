//! Deterministic food and cocktail pairings, used whenever the
//! text-generation collaborator is disabled or fails.

use crate::domain::beverage::{DrinkType, Occasion};
use crate::domain::pairing::Pairing;

/// Curated pairings for a beverage type and occasion: 2-3 food suggestions
/// picked by occasion bucket, plus the type's two signature cocktails. Pure
/// and non-empty for all six types.
pub fn default_pairings(drink_type: DrinkType, occasion: Occasion) -> Vec<Pairing> {
    let mut pairings = food_pairings(drink_type, occasion);
    pairings.extend(cocktail_pairings(drink_type));
    pairings
}

fn food_pairings(drink_type: DrinkType, occasion: Occasion) -> Vec<Pairing> {
    match drink_type {
        DrinkType::Whiskey => match occasion {
            Occasion::Dinner => vec![
                Pairing::food(
                    "Tandoori Lamb Chops",
                    "Spicy grilled lamb with smoky notes that complement the whiskey's rich character.",
                ),
                Pairing::food(
                    "Aged Cheddar Cheese",
                    "Sharp, mature cheese brings out the whiskey's vanilla and oak notes.",
                ),
                Pairing::food(
                    "Dark Chocolate Truffles",
                    "Rich chocolate enhances the whiskey's caramel and spice undertones.",
                ),
            ],
            Occasion::Casual => vec![
                Pairing::food(
                    "Spiced Mixed Nuts",
                    "Warm spices in nuts complement the whiskey's complex flavor profile.",
                ),
                Pairing::food(
                    "Smoked Salmon Canapés",
                    "Smoky fish pairs beautifully with the whiskey's peaty notes.",
                ),
                Pairing::food(
                    "Caramel Popcorn",
                    "Sweet caramel enhances the whiskey's vanilla and toffee flavors.",
                ),
            ],
            _ => vec![
                Pairing::food(
                    "Mini Beef Sliders",
                    "Rich patties complement the whiskey's bold, full-bodied character.",
                ),
                Pairing::food(
                    "Blue Cheese Stuffed Olives",
                    "Salty, tangy olives contrast nicely with the whiskey's sweetness.",
                ),
                Pairing::food(
                    "Chocolate Covered Coffee Beans",
                    "Coffee notes enhance the whiskey's roasted, complex flavors.",
                ),
            ],
        },
        DrinkType::Beer => match occasion {
            Occasion::Casual => vec![
                Pairing::food(
                    "Butter Chicken Sliders",
                    "Creamy curry pairs perfectly with a refreshing beer.",
                ),
                Pairing::food(
                    "Spicy Nachos",
                    "Crunchy chips with cheese and jalapeños complement the beer's crispness.",
                ),
                Pairing::food(
                    "Grilled Paneer Skewers",
                    "Light, grilled cheese pairs well with beer's refreshing profile.",
                ),
            ],
            _ => vec![
                Pairing::food("Fish & Chips", "Classic pub food that complements any beer style."),
                Pairing::food("Biryani", "Aromatic rice dish pairs beautifully with beer's carbonation."),
                Pairing::food("Chicken Wings", "Spicy wings are perfect with cold beer."),
            ],
        },
        DrinkType::Vodka => match occasion {
            Occasion::Party => vec![
                Pairing::food(
                    "Caviar on Blinis",
                    "Premium pairing that showcases vodka's clean, neutral character.",
                ),
                Pairing::food(
                    "Smoked Salmon Canapés",
                    "Delicate fish flavors are enhanced by clean vodka.",
                ),
                Pairing::food(
                    "Mini Crab Cakes",
                    "Light seafood pairs beautifully with vodka's crisp profile.",
                ),
            ],
            _ => vec![
                Pairing::food("Fresh Oysters", "Briny oysters are perfect with chilled vodka."),
                Pairing::food(
                    "Cucumber Sandwiches",
                    "Light, refreshing sandwiches complement vodka's clean taste.",
                ),
                Pairing::food(
                    "Lemon Herb Hummus",
                    "Fresh herbs and citrus enhance vodka's subtle flavors.",
                ),
            ],
        },
        DrinkType::Rum => match occasion {
            Occasion::Casual => vec![
                Pairing::food(
                    "Caribbean Jerk Chicken",
                    "Spiced chicken complements rum's tropical, sweet character.",
                ),
                Pairing::food("Coconut Shrimp", "Tropical flavors that pair naturally with rum."),
                Pairing::food(
                    "Mango Salsa with Chips",
                    "Sweet, tropical fruit enhances rum's fruity notes.",
                ),
            ],
            _ => vec![
                Pairing::food(
                    "Chocolate Lava Cake",
                    "Rich chocolate pairs beautifully with rum's sweetness.",
                ),
                Pairing::food(
                    "Pineapple Upside Down Cake",
                    "Tropical dessert that complements rum perfectly.",
                ),
                Pairing::food("Spiced Nuts", "Warm spices enhance rum's complex flavor profile."),
            ],
        },
        DrinkType::Gin => match occasion {
            Occasion::Casual => vec![
                Pairing::food(
                    "Cucumber & Mint Salad",
                    "Fresh cucumber enhances gin's botanical notes.",
                ),
                Pairing::food("Smoked Salmon", "Light fish pairs beautifully with gin's crisp profile."),
                Pairing::food("Herb-Roasted Olives", "Herbs complement gin's botanical complexity."),
            ],
            _ => vec![
                Pairing::food(
                    "Seafood Platter",
                    "Fresh seafood showcases gin's clean, botanical character.",
                ),
                Pairing::food("Goat Cheese Crostini", "Tangy cheese pairs well with gin's herbal notes."),
                Pairing::food(
                    "Lemon Herb Chicken",
                    "Citrus and herbs enhance gin's botanical profile.",
                ),
            ],
        },
        DrinkType::Wine => match occasion {
            Occasion::Dinner => vec![
                Pairing::food(
                    "Aged Cheese Board",
                    "Rich cheeses complement the wine's tannins and fruit.",
                ),
                Pairing::food("Grilled Lamb", "Rich meat pairs beautifully with a full-bodied pour."),
                Pairing::food("Dark Chocolate", "Bittersweet chocolate enhances the wine's complexity."),
            ],
            _ => vec![
                Pairing::food("Fresh Seafood", "Light seafood pairs perfectly with a crisp glass."),
                Pairing::food("Goat Cheese", "Tangy cheese complements the wine's acidity."),
                Pairing::food("Light Pasta", "Simple pasta dishes pair well with wine."),
            ],
        },
    }
}

/// Exactly two signature cocktails per type, occasion-independent.
fn cocktail_pairings(drink_type: DrinkType) -> Vec<Pairing> {
    match drink_type {
        DrinkType::Whiskey => vec![
            Pairing::cocktail(
                "Old Fashioned",
                "Classic cocktail that showcases the whiskey's rich flavors with bitters and sugar.",
                vec!["Whiskey", "Angostura bitters", "Sugar cube", "Orange peel", "Ice"],
            ),
            Pairing::cocktail(
                "Whiskey Sour",
                "Refreshing cocktail with citrus that balances the whiskey's bold character.",
                vec!["Whiskey", "Fresh lemon juice", "Simple syrup", "Egg white", "Ice"],
            ),
        ],
        DrinkType::Beer => vec![
            Pairing::cocktail(
                "Beer Shandy",
                "Refreshing mix of beer and lemonade perfect for casual gatherings.",
                vec!["Beer", "Fresh lemonade", "Lemon slice", "Ice"],
            ),
            Pairing::cocktail(
                "Black Velvet",
                "Elegant mix of stout and champagne for special occasions.",
                vec!["Stout beer", "Champagne or sparkling wine", "Chilled glasses"],
            ),
        ],
        DrinkType::Vodka => vec![
            Pairing::cocktail(
                "Moscow Mule",
                "Refreshing cocktail with ginger beer and lime that highlights vodka's clean profile.",
                vec!["Vodka", "Ginger beer", "Fresh lime juice", "Mint sprig", "Ice"],
            ),
            Pairing::cocktail(
                "Vodka Martini",
                "Elegant classic that showcases vodka's smooth, clean character.",
                vec!["Vodka", "Dry vermouth", "Lemon twist or olives", "Ice"],
            ),
        ],
        DrinkType::Rum => vec![
            Pairing::cocktail(
                "Mojito",
                "Fresh and minty cocktail perfect for warm weather and casual occasions.",
                vec!["White rum", "Fresh mint leaves", "Lime juice", "Simple syrup", "Soda water", "Ice"],
            ),
            Pairing::cocktail(
                "Dark 'n' Stormy",
                "Spicy cocktail with ginger beer that complements rum's sweetness.",
                vec!["Dark rum", "Ginger beer", "Lime juice", "Ice"],
            ),
        ],
        DrinkType::Gin => vec![
            Pairing::cocktail(
                "Gin & Tonic",
                "Timeless classic that highlights gin's botanical complexity with refreshing tonic.",
                vec!["Gin", "Premium tonic water", "Lime wedge", "Ice"],
            ),
            Pairing::cocktail(
                "Negroni",
                "Sophisticated cocktail that showcases gin's herbal notes with sweet vermouth and Campari.",
                vec!["Gin", "Sweet vermouth", "Campari", "Orange peel", "Ice"],
            ),
        ],
        DrinkType::Wine => vec![
            Pairing::cocktail(
                "Wine Spritzer",
                "Light, refreshing cocktail that's perfect for casual occasions.",
                vec!["White wine", "Soda water", "Lemon slice", "Ice"],
            ),
            Pairing::cocktail(
                "Sangria",
                "Fruity wine cocktail that's great for parties and gatherings.",
                vec!["Red wine", "Fresh fruits", "Brandy", "Orange liqueur", "Ice"],
            ),
        ],
    }
}
