//! Embedded default vocabulary
//!
//! A compiled-in list of common five-letter words, used when no word
//! list file is supplied.

/// Default vocabulary of common five-letter words
pub const DEFAULT_WORDS: &[&str] = &[
    "abbey",
    "abide",
    "about",
    "above",
    "abuse",
    "actor",
    "acute",
    "adapt",
    "admit",
    "adobe",
    "adopt",
    "after",
    "again",
    "agent",
    "agree",
    "ahead",
    "alarm",
    "album",
    "alert",
    "alike",
    "alive",
    "allow",
    "alone",
    "along",
    "altar",
    "amber",
    "amend",
    "among",
    "angel",
    "anger",
    "angle",
    "ankle",
    "apart",
    "apple",
    "apply",
    "apron",
    "arena",
    "argon",
    "argue",
    "arise",
    "armor",
    "aroma",
    "array",
    "arrow",
    "aside",
    "asset",
    "atoll",
    "audio",
    "audit",
    "avoid",
    "awake",
    "award",
    "aware",
    "axiom",
    "bacon",
    "badge",
    "basic",
    "basin",
    "beach",
    "began",
    "begin",
    "being",
    "belly",
    "below",
    "bench",
    "berry",
    "birth",
    "black",
    "blade",
    "blame",
    "blank",
    "blast",
    "blaze",
    "bleak",
    "blend",
    "bless",
    "blind",
    "block",
    "bloom",
    "board",
    "bonus",
    "boost",
    "booth",
    "bound",
    "brain",
    "brand",
    "brave",
    "bread",
    "break",
    "brick",
    "bride",
    "brief",
    "bring",
    "broad",
    "brown",
    "brush",
    "build",
    "bunch",
    "burst",
    "cabin",
    "cable",
    "camel",
    "candy",
    "canoe",
    "cargo",
    "carry",
    "catch",
    "cause",
    "cedar",
    "chain",
    "chair",
    "chalk",
    "charm",
    "chart",
    "chase",
    "cheap",
    "check",
    "chess",
    "chest",
    "chief",
    "child",
    "chill",
    "choir",
    "chose",
    "cider",
    "cigar",
    "civic",
    "civil",
    "claim",
    "clash",
    "clean",
    "clear",
    "clerk",
    "click",
    "cliff",
    "climb",
    "clock",
    "close",
    "cloth",
    "cloud",
    "coach",
    "coast",
    "cobra",
    "cocoa",
    "colon",
    "color",
    "comet",
    "coral",
    "couch",
    "count",
    "court",
    "cover",
    "crack",
    "craft",
    "crane",
    "crash",
    "crate",
    "crawl",
    "cream",
    "creek",
    "crime",
    "crisp",
    "cross",
    "crowd",
    "crown",
    "crumb",
    "crush",
    "curve",
    "cycle",
    "daily",
    "dairy",
    "dance",
    "dealt",
    "debut",
    "decay",
    "decor",
    "delay",
    "delta",
    "dense",
    "depth",
    "derby",
    "devil",
    "diary",
    "digit",
    "diner",
    "dirty",
    "disco",
    "ditch",
    "dizzy",
    "dodge",
    "donor",
    "doubt",
    "dough",
    "dozen",
    "draft",
    "drain",
    "drama",
    "dream",
    "dress",
    "drift",
    "drill",
    "drink",
    "drive",
    "drove",
    "dusty",
    "dwell",
    "eager",
    "eagle",
    "early",
    "earth",
    "eight",
    "elbow",
    "elder",
    "elect",
    "elite",
    "empty",
    "enemy",
    "enjoy",
    "enter",
    "entry",
    "equal",
    "equip",
    "erase",
    "error",
    "essay",
    "ethic",
    "event",
    "every",
    "exact",
    "exams",
    "exile",
    "exist",
    "extra",
    "fable",
    "faint",
    "fairy",
    "faith",
    "false",
    "fancy",
    "fatal",
    "fault",
    "favor",
    "feast",
    "fence",
    "ferry",
    "fever",
    "fiber",
    "field",
    "fifth",
    "fifty",
    "fight",
    "final",
    "first",
    "flame",
    "flash",
    "fleet",
    "flesh",
    "float",
    "flock",
    "floor",
    "flour",
    "fluid",
    "flute",
    "focus",
    "force",
    "forge",
    "forth",
    "forty",
    "forum",
    "found",
    "frame",
    "fraud",
    "fresh",
    "front",
    "frost",
    "fruit",
    "fudge",
    "fully",
    "funny",
    "gauge",
    "ghost",
    "giant",
    "given",
    "glass",
    "globe",
    "glory",
    "glove",
    "grace",
    "grade",
    "grain",
    "grand",
    "grant",
    "grape",
    "graph",
    "grasp",
    "grass",
    "grate",
    "grave",
    "great",
    "green",
    "greet",
    "grief",
    "grill",
    "gross",
    "group",
    "grove",
    "grown",
    "guard",
    "guess",
    "guest",
    "guide",
    "habit",
    "happy",
    "harsh",
    "heart",
    "heavy",
    "hedge",
    "hello",
    "hence",
    "hobby",
    "honey",
    "honor",
    "horse",
    "hotel",
    "house",
    "human",
    "humor",
    "hurry",
    "ideal",
    "image",
    "imply",
    "index",
    "inner",
    "input",
    "irate",
    "irony",
    "issue",
    "ivory",
    "jelly",
    "jewel",
    "joint",
    "judge",
    "juice",
    "knife",
    "knock",
    "known",
    "label",
    "labor",
    "large",
    "laser",
    "later",
    "laugh",
    "layer",
    "learn",
    "lease",
    "least",
    "leave",
    "legal",
    "lemon",
    "level",
    "light",
    "limit",
    "linen",
    "liver",
    "lobby",
    "local",
    "lodge",
    "logic",
    "loose",
    "lorry",
    "lower",
    "loyal",
    "lucky",
    "lunar",
    "lunch",
    "magic",
    "major",
    "maker",
    "mango",
    "maple",
    "march",
    "marsh",
    "match",
    "maybe",
    "mayor",
    "medal",
    "media",
    "melon",
    "mercy",
    "merge",
    "merit",
    "metal",
    "meter",
    "micro",
    "might",
    "minor",
    "minus",
    "mixer",
    "model",
    "moist",
    "money",
    "month",
    "moral",
    "motor",
    "mount",
    "mouse",
    "mouth",
    "movie",
    "music",
    "naive",
    "nerve",
    "never",
    "newly",
    "night",
    "noble",
    "noise",
    "north",
    "novel",
    "nurse",
    "oasis",
    "occur",
    "ocean",
    "offer",
    "often",
    "olive",
    "onion",
    "opera",
    "orbit",
    "order",
    "organ",
    "other",
    "otter",
    "ought",
    "ounce",
    "outer",
    "owner",
    "oxide",
    "ozone",
    "paint",
    "panel",
    "panic",
    "paper",
    "party",
    "pasta",
    "patch",
    "pause",
    "peace",
    "peach",
    "pearl",
    "pedal",
    "penny",
    "phase",
    "phone",
    "photo",
    "piano",
    "piece",
    "pilot",
    "pitch",
    "pivot",
    "pixel",
    "pizza",
    "place",
    "plain",
    "plane",
    "plant",
    "plate",
    "plaza",
    "point",
    "polar",
    "porch",
    "pound",
    "power",
    "press",
    "price",
    "pride",
    "prime",
    "print",
    "prior",
    "prize",
    "probe",
    "prone",
    "proof",
    "proud",
    "prove",
    "proxy",
    "pulse",
    "punch",
    "pupil",
    "queen",
    "query",
    "quest",
    "queue",
    "quick",
    "quiet",
    "quilt",
    "quota",
    "quote",
    "radar",
    "radio",
    "raise",
    "rally",
    "ranch",
    "range",
    "rapid",
    "ratio",
    "reach",
    "ready",
    "realm",
    "rebel",
    "refer",
    "reign",
    "relax",
    "relay",
    "renew",
    "reply",
    "rhyme",
    "rider",
    "ridge",
    "rifle",
    "right",
    "rigid",
    "risky",
    "rival",
    "river",
    "roast",
    "robin",
    "robot",
    "rocky",
    "rogue",
    "roman",
    "rough",
    "round",
    "route",
    "royal",
    "rural",
    "salad",
    "salon",
    "sandy",
    "sauce",
    "scale",
    "scene",
    "scent",
    "scope",
    "score",
    "scout",
    "sense",
    "serve",
    "seven",
    "shade",
    "shaft",
    "shake",
    "shape",
    "share",
    "sharp",
    "sheep",
    "sheet",
    "shelf",
    "shell",
    "shift",
    "shine",
    "shirt",
    "shock",
    "shore",
    "short",
    "shout",
    "shrub",
    "sight",
    "silly",
    "since",
    "sixty",
    "skill",
    "skirt",
    "slate",
    "sleep",
    "slice",
    "slide",
    "slope",
    "small",
    "smart",
    "smile",
    "smoke",
    "snake",
    "solar",
    "solid",
    "solve",
    "sonar",
    "sound",
    "south",
    "space",
    "spare",
    "spark",
    "speak",
    "speed",
    "spell",
    "spend",
    "spice",
    "spine",
    "spite",
    "split",
    "sport",
    "spray",
    "squad",
    "stack",
    "staff",
    "stage",
    "stain",
    "stair",
    "stake",
    "stale",
    "stamp",
    "stand",
    "stare",
    "start",
    "state",
    "steam",
    "steel",
    "steep",
    "steer",
    "stems",
    "stern",
    "stick",
    "stiff",
    "still",
    "stock",
    "stone",
    "stood",
    "store",
    "storm",
    "story",
    "stout",
    "stove",
    "strap",
    "straw",
    "strip",
    "study",
    "style",
    "sugar",
    "suite",
    "sunny",
    "super",
    "surge",
    "swamp",
    "swear",
    "sweet",
    "swift",
    "swing",
    "sword",
    "table",
    "taken",
    "taste",
    "teach",
    "tempo",
    "tenth",
    "thank",
    "theme",
    "there",
    "thick",
    "thief",
    "thing",
    "think",
    "third",
    "thorn",
    "three",
    "throw",
    "thumb",
    "tiger",
    "tight",
    "timer",
    "title",
    "toast",
    "today",
    "token",
    "tooth",
    "topic",
    "torch",
    "total",
    "touch",
    "tough",
    "towel",
    "tower",
    "toxic",
    "trace",
    "track",
    "trade",
    "trail",
    "train",
    "trait",
    "treat",
    "trend",
    "trial",
    "tribe",
    "trick",
    "troop",
    "truck",
    "truly",
    "trunk",
    "trust",
    "truth",
    "tulip",
    "tutor",
    "twice",
    "twist",
    "ultra",
    "uncle",
    "under",
    "union",
    "unite",
    "unity",
    "until",
    "upper",
    "upset",
    "urban",
    "usage",
    "usher",
    "usual",
    "vague",
    "valid",
    "value",
    "valve",
    "vapor",
    "vault",
    "venue",
    "verse",
    "video",
    "vigor",
    "vinyl",
    "viola",
    "virus",
    "visit",
    "vital",
    "vivid",
    "vocal",
    "voice",
    "voter",
    "wagon",
    "waist",
    "waste",
    "watch",
    "water",
    "weary",
    "wedge",
    "weigh",
    "weird",
    "whale",
    "wheat",
    "wheel",
    "where",
    "which",
    "while",
    "white",
    "whole",
    "widow",
    "width",
    "world",
    "worry",
    "worth",
    "wound",
    "woven",
    "wrist",
    "write",
    "wrong",
    "yacht",
    "yeast",
    "yield",
    "young",
    "youth",
    "zebra",
];

/// Number of words in `DEFAULT_WORDS`
pub const DEFAULT_WORD_COUNT: usize = 767;
