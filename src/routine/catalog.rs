//! Instruction text for every step the builder can emit.

pub const GEL_CLEANSER: &str = "Cleanse with a gentle foaming gel cleanser";
pub const CREAM_CLEANSER: &str = "Cleanse with a hydrating cream cleanser";

pub const NIACINAMIDE_SERUM: &str =
    "Apply niacinamide 10% serum to regulate oil and calm breakouts";
pub const VITAMIN_C_SERUM: &str = "Apply vitamin C serum to brighten and fade dark spots";

pub const GEL_MOISTURIZER: &str = "Apply a lightweight gel moisturizer";
pub const CREAM_MOISTURIZER: &str = "Apply a nourishing cream moisturizer";

pub const SUNSCREEN: &str = "Apply broad-spectrum SPF 30+ sunscreen";

pub const MICELLAR_DOUBLE_CLEANSE: &str =
    "Remove makeup with micellar water, then cleanse with a gel cleanser";
pub const OIL_DOUBLE_CLEANSE: &str =
    "Remove makeup with a cleansing oil, then cleanse with a cream cleanser";

pub const SALICYLIC_ACID: &str = "Apply salicylic acid 2% treatment to breakout-prone areas";

pub const RETINOL_START_LOW: &str =
    "Apply a pea-sized amount of retinol 0.25% (start low to build tolerance)";
pub const RETINOL_STANDARD: &str = "Apply a pea-sized amount of retinol 0.5%";

pub const CERAMIDE_NIGHT_CREAM: &str = "Apply a rich ceramide night cream";
pub const HYALURONIC_NIGHT_MOISTURIZER: &str = "Apply a hyaluronic acid night moisturizer";
