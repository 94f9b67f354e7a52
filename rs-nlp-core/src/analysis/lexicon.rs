//! Closed-class word lists and small gazetteers.
//!
//! All entries are lowercase.

pub(crate) const DETERMINERS: &[&str] = &[
	"a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no",
	"another", "either", "neither", "all", "both", "which", "whose", "what",
];

pub(crate) const PRONOUNS: &[&str] = &[
	"i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he", "him",
	"his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our",
	"ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom", "someone",
	"somebody", "something", "anyone", "anybody", "anything", "everyone", "everybody", "everything",
	"nobody", "nothing",
];

pub(crate) const ADPOSITIONS: &[&str] = &[
	"in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
	"during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off", "over",
	"under", "around", "among", "across", "behind", "beyond", "near", "without", "within", "along",
	"toward", "towards", "upon", "via", "per", "despite", "like", "than",
];

pub(crate) const COORDINATING_CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "plus"];

pub(crate) const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
	"because", "although", "though", "while", "whereas", "if", "unless", "since", "whether",
	"once", "until", "so", "as", "when", "whenever", "where", "wherever",
];

pub(crate) const AUXILIARIES: &[&str] = &[
	"be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having", "do",
	"does", "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
	"'s", "'re", "'m", "'ve", "'ll", "'d", "ca", "wo",
];

pub(crate) const PARTICLES: &[&str] = &["not", "n't", "'s"];

pub(crate) const INTERJECTIONS: &[&str] = &[
	"oh", "ah", "wow", "hey", "hello", "hi", "oops", "ouch", "yes", "yeah", "no", "ok", "okay",
	"alas", "hooray", "please", "thanks", "bye",
];

pub(crate) const ADVERBS: &[&str] = &[
	"very", "really", "too", "also", "just", "now", "then", "here", "there", "never", "always",
	"often", "sometimes", "soon", "already", "still", "again", "almost", "quite", "rather",
	"perhaps", "maybe", "even", "only", "well", "however", "therefore", "thus", "instead",
	"indeed", "ever", "yet", "later", "today", "tomorrow", "yesterday", "together", "away",
	"back", "much", "more", "most", "less", "least", "how", "why", "extremely", "so",
];

pub(crate) const ADJECTIVES: &[&str] = &[
	"good", "bad", "great", "new", "old", "big", "small", "large", "little", "long", "short",
	"high", "low", "young", "early", "late", "important", "different", "same", "other", "right",
	"wrong", "happy", "sad", "easy", "hard", "best", "better", "worse", "worst", "first", "last",
	"next", "few", "many", "several", "own", "free", "full", "whole", "real", "true", "false",
	"sure", "clear", "nice", "fine", "strong", "weak", "main", "major", "simple", "black",
	"white", "red", "blue", "green", "able", "possible", "likely", "hot", "cold", "dark",
	"bright", "quick", "slow", "fast", "lazy", "brown",
];

pub(crate) const VERBS: &[&str] = &[
	"say", "said", "says", "get", "got", "gets", "make", "made", "makes", "go", "went", "goes",
	"gone", "know", "knew", "known", "knows", "take", "took", "taken", "takes", "see", "saw",
	"seen", "sees", "come", "came", "comes", "think", "thought", "thinks", "look", "looks",
	"want", "wants", "give", "gave", "given", "gives", "use", "uses", "find", "found", "finds",
	"tell", "told", "tells", "ask", "asks", "work", "works", "seem", "seems", "feel", "felt",
	"feels", "try", "tries", "leave", "left", "leaves", "call", "calls", "keep", "kept", "let",
	"begin", "began", "begun", "show", "shows", "hear", "heard", "play", "run", "ran", "runs",
	"move", "live", "lives", "believe", "bring", "brought", "write", "wrote", "written", "sit",
	"sat", "sits", "stand", "stood", "lose", "lost", "pay", "paid", "meet", "met", "include",
	"continue", "set", "learn", "change", "lead", "led", "understand", "understood", "watch",
	"follow", "stop", "create", "speak", "spoke", "read", "spend", "spent", "grow", "grew",
	"open", "walk", "win", "won", "offer", "remember", "love", "loves", "like", "likes", "hate",
	"consider", "appear", "buy", "bought", "wait", "serve", "die", "send", "sent", "expect",
	"build", "built", "stay", "fall", "fell", "cut", "reach", "kill", "remain", "jump", "jumps",
	"eat", "ate", "need", "needs", "put", "help", "helps", "become", "became", "mean", "means",
];

pub(crate) const NUMBER_WORDS: &[&str] = &[
	"zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
	"eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
	"nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
	"hundred", "thousand", "million", "billion", "trillion", "dozen",
];

pub(crate) const MONTHS: &[&str] = &[
	"january", "february", "march", "april", "may", "june", "july", "august", "september",
	"october", "november", "december",
];

pub(crate) const WEEKDAYS: &[&str] = &[
	"monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

pub(crate) const PLACES: &[&str] = &[
	"africa", "america", "asia", "europe", "australia", "antarctica", "united states",
	"united kingdom", "usa", "us", "uk", "canada", "mexico", "brazil", "argentina", "france",
	"germany", "italy", "spain", "portugal", "romania", "poland", "russia", "ukraine", "china",
	"japan", "india", "korea", "egypt", "nigeria", "kenya", "turkey", "greece", "ireland",
	"scotland", "england", "wales", "sweden", "norway", "finland", "denmark", "netherlands",
	"belgium", "switzerland", "austria", "hungary", "london", "paris", "berlin", "madrid",
	"rome", "bucharest", "new york", "los angeles", "chicago", "san francisco", "washington",
	"boston", "tokyo", "beijing", "moscow", "sydney", "toronto", "dublin", "amsterdam",
	"brussels", "vienna", "california", "texas", "florida",
];

pub(crate) const ORG_MARKERS: &[&str] = &[
	"inc", "corp", "corporation", "ltd", "llc", "plc", "co", "company", "university", "college",
	"institute", "bank", "association", "foundation", "agency", "council", "ministry",
	"department", "group", "party", "club", "committee", "organization", "organisation",
	"society", "school", "museum", "times", "news",
];

pub(crate) const PERSON_TITLES: &[&str] = &[
	"mr", "mrs", "ms", "miss", "dr", "prof", "professor", "sir", "madam", "president", "king",
	"queen", "prince", "princess", "senator", "judge", "captain",
];

/// Returns true when `word` (any case) is listed in `list`.
pub(crate) fn contains(list: &[&str], word: &str) -> bool {
	let lower = word.to_lowercase();
	list.contains(&lower.as_str())
}

/// True for words belonging to a closed grammatical class.
pub(crate) fn is_function_word(word: &str) -> bool {
	[
		DETERMINERS,
		PRONOUNS,
		ADPOSITIONS,
		COORDINATING_CONJUNCTIONS,
		SUBORDINATING_CONJUNCTIONS,
		AUXILIARIES,
		PARTICLES,
		INTERJECTIONS,
		ADVERBS,
	]
	.iter()
	.any(|list| contains(list, word))
}
