// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The floor catalog. Glyphs from emoji 0.6 through 5.0, which every supported platform
//! can render.

use super::{CategoryRows, EmojiRelease, emoji, toned};
use crate::{EmojiCategoryType::{People, Nature, FoodAndDrink, Activity, TravelAndPlaces, Objects, Symbols, Flags},
            UnicodeVersion};

const E0_6: UnicodeVersion = UnicodeVersion::new(0, 6);
const E0_7: UnicodeVersion = UnicodeVersion::new(0, 7);
const E1_0: UnicodeVersion = UnicodeVersion::new(1, 0);
const E2_0: UnicodeVersion = UnicodeVersion::new(2, 0);
const E3_0: UnicodeVersion = UnicodeVersion::new(3, 0);
const E4_0: UnicodeVersion = UnicodeVersion::new(4, 0);
const E5_0: UnicodeVersion = UnicodeVersion::new(5, 0);

pub const RELEASE: EmojiRelease = EmojiRelease {
    version: E5_0,
    additions: ADDITIONS,
};

#[rustfmt::skip]
const ADDITIONS: &[CategoryRows] = &[
    (People, &[
        emoji(&[0x1F600], "grinning face", E1_0),
        emoji(&[0x1F603], "grinning face with big eyes", E0_6),
        emoji(&[0x1F604], "grinning face with smiling eyes", E0_6),
        emoji(&[0x1F601], "beaming face with smiling eyes", E0_6),
        emoji(&[0x1F606], "grinning squinting face", E0_6),
        emoji(&[0x1F605], "grinning face with sweat", E0_6),
        emoji(&[0x1F923], "rolling on the floor laughing", E3_0),
        emoji(&[0x1F602], "face with tears of joy", E0_6),
        emoji(&[0x1F642], "slightly smiling face", E1_0),
        emoji(&[0x1F643], "upside-down face", E1_0),
        emoji(&[0x1F609], "winking face", E0_6),
        emoji(&[0x1F60A], "smiling face with smiling eyes", E0_6),
        emoji(&[0x1F607], "smiling face with halo", E1_0),
        emoji(&[0x1F60D], "smiling face with heart-eyes", E0_6),
        emoji(&[0x1F929], "star-struck", E5_0),
        emoji(&[0x1F618], "face blowing a kiss", E0_6),
        emoji(&[0x1F617], "kissing face", E1_0),
        emoji(&[0x263A, 0xFE0F], "smiling face", E0_6),
        emoji(&[0x1F61A], "kissing face with closed eyes", E0_6),
        emoji(&[0x1F619], "kissing face with smiling eyes", E1_0),
        emoji(&[0x1F60B], "face savoring food", E0_6),
        emoji(&[0x1F61B], "face with tongue", E1_0),
        emoji(&[0x1F61C], "winking face with tongue", E0_6),
        emoji(&[0x1F92A], "zany face", E5_0),
        emoji(&[0x1F61D], "squinting face with tongue", E0_6),
        emoji(&[0x1F911], "money-mouth face", E1_0),
        emoji(&[0x1F917], "smiling face with open hands", E1_0),
        emoji(&[0x1F92D], "face with hand over mouth", E5_0),
        emoji(&[0x1F92B], "shushing face", E5_0),
        emoji(&[0x1F914], "thinking face", E1_0),
        emoji(&[0x1F910], "zipper-mouth face", E1_0),
        emoji(&[0x1F928], "face with raised eyebrow", E5_0),
        emoji(&[0x1F610], "neutral face", E0_7),
        emoji(&[0x1F611], "expressionless face", E1_0),
        emoji(&[0x1F636], "face without mouth", E1_0),
        emoji(&[0x1F60F], "smirking face", E0_6),
        emoji(&[0x1F612], "unamused face", E0_6),
        emoji(&[0x1F644], "face with rolling eyes", E1_0),
        emoji(&[0x1F62C], "grimacing face", E1_0),
        emoji(&[0x1F925], "lying face", E3_0),
        emoji(&[0x1F60C], "relieved face", E0_6),
        emoji(&[0x1F614], "pensive face", E0_6),
        emoji(&[0x1F62A], "sleepy face", E0_6),
        emoji(&[0x1F924], "drooling face", E3_0),
        emoji(&[0x1F634], "sleeping face", E1_0),
        emoji(&[0x1F637], "face with medical mask", E0_6),
        emoji(&[0x1F912], "face with thermometer", E1_0),
        emoji(&[0x1F915], "face with head-bandage", E1_0),
        emoji(&[0x1F922], "nauseated face", E3_0),
        emoji(&[0x1F92E], "face vomiting", E5_0),
        emoji(&[0x1F927], "sneezing face", E3_0),
        emoji(&[0x1F635], "face with crossed-out eyes", E0_6),
        emoji(&[0x1F92F], "exploding head", E5_0),
        emoji(&[0x1F920], "cowboy hat face", E3_0),
        emoji(&[0x1F60E], "smiling face with sunglasses", E1_0),
        emoji(&[0x1F913], "nerd face", E1_0),
        emoji(&[0x1F9D0], "face with monocle", E5_0),
        emoji(&[0x1F615], "confused face", E1_0),
        emoji(&[0x1F61F], "worried face", E1_0),
        emoji(&[0x1F641], "slightly frowning face", E1_0),
        emoji(&[0x2639, 0xFE0F], "frowning face", E0_7),
        emoji(&[0x1F62E], "face with open mouth", E1_0),
        emoji(&[0x1F62F], "hushed face", E1_0),
        emoji(&[0x1F632], "astonished face", E0_6),
        emoji(&[0x1F633], "flushed face", E0_6),
        emoji(&[0x1F626], "frowning face with open mouth", E1_0),
        emoji(&[0x1F627], "anguished face", E1_0),
        emoji(&[0x1F628], "fearful face", E0_6),
        emoji(&[0x1F630], "anxious face with sweat", E0_6),
        emoji(&[0x1F625], "sad but relieved face", E0_6),
        emoji(&[0x1F622], "crying face", E0_6),
        emoji(&[0x1F62D], "loudly crying face", E0_6),
        emoji(&[0x1F631], "face screaming in fear", E0_6),
        emoji(&[0x1F616], "confounded face", E0_6),
        emoji(&[0x1F623], "persevering face", E0_6),
        emoji(&[0x1F61E], "disappointed face", E0_6),
        emoji(&[0x1F613], "downcast face with sweat", E0_6),
        emoji(&[0x1F629], "weary face", E0_6),
        emoji(&[0x1F62B], "tired face", E0_6),
        emoji(&[0x1F624], "face with steam from nose", E0_6),
        emoji(&[0x1F621], "enraged face", E0_6),
        emoji(&[0x1F620], "angry face", E0_6),
        emoji(&[0x1F92C], "face with symbols on mouth", E5_0),
        emoji(&[0x1F608], "smiling face with horns", E1_0),
        emoji(&[0x1F47F], "angry face with horns", E0_6),
        emoji(&[0x1F480], "skull", E0_6),
        emoji(&[0x2620, 0xFE0F], "skull and crossbones", E1_0),
        emoji(&[0x1F4A9], "pile of poo", E0_6),
        emoji(&[0x1F921], "clown face", E3_0),
        emoji(&[0x1F479], "ogre", E0_6),
        emoji(&[0x1F47A], "goblin", E0_6),
        emoji(&[0x1F47B], "ghost", E0_6),
        emoji(&[0x1F47D], "alien", E0_6),
        emoji(&[0x1F47E], "alien monster", E0_6),
        emoji(&[0x1F916], "robot", E1_0),
        emoji(&[0x1F63A], "grinning cat", E0_6),
        emoji(&[0x1F638], "grinning cat with smiling eyes", E0_6),
        emoji(&[0x1F639], "cat with tears of joy", E0_6),
        emoji(&[0x1F63B], "smiling cat with heart-eyes", E0_6),
        emoji(&[0x1F63C], "cat with wry smile", E0_6),
        emoji(&[0x1F63D], "kissing cat", E0_6),
        emoji(&[0x1F640], "weary cat", E0_6),
        emoji(&[0x1F63F], "crying cat", E0_6),
        emoji(&[0x1F63E], "pouting cat", E0_6),
        emoji(&[0x1F648], "see-no-evil monkey", E0_6),
        emoji(&[0x1F649], "hear-no-evil monkey", E0_6),
        emoji(&[0x1F64A], "speak-no-evil monkey", E0_6),
        emoji(&[0x1F48C], "love letter", E0_6),
        emoji(&[0x1F498], "heart with arrow", E0_6),
        emoji(&[0x1F49D], "heart with ribbon", E0_6),
        emoji(&[0x1F496], "sparkling heart", E0_6),
        emoji(&[0x1F497], "growing heart", E0_6),
        emoji(&[0x1F493], "beating heart", E0_6),
        emoji(&[0x1F49E], "revolving hearts", E0_6),
        emoji(&[0x1F495], "two hearts", E0_6),
        emoji(&[0x1F49F], "heart decoration", E0_6),
        emoji(&[0x2763, 0xFE0F], "heart exclamation", E1_0),
        emoji(&[0x1F494], "broken heart", E0_6),
        emoji(&[0x2764, 0xFE0F], "red heart", E0_6),
        emoji(&[0x1F9E1], "orange heart", E5_0),
        emoji(&[0x1F49B], "yellow heart", E0_6),
        emoji(&[0x1F49A], "green heart", E0_6),
        emoji(&[0x1F499], "blue heart", E0_6),
        emoji(&[0x1F49C], "purple heart", E0_6),
        emoji(&[0x1F5A4], "black heart", E3_0),
        emoji(&[0x1F48B], "kiss mark", E0_6),
        emoji(&[0x1F4AF], "hundred points", E0_6),
        emoji(&[0x1F4A2], "anger symbol", E0_6),
        emoji(&[0x1F4A5], "collision", E0_6),
        emoji(&[0x1F4AB], "dizzy", E0_6),
        emoji(&[0x1F4A6], "sweat droplets", E0_6),
        emoji(&[0x1F4A8], "dashing away", E0_6),
        emoji(&[0x1F573, 0xFE0F], "hole", E0_7),
        emoji(&[0x1F4AC], "speech balloon", E0_6),
        emoji(&[0x1F441, 0xFE0F, 0x200D, 0x1F5E8, 0xFE0F], "eye in speech bubble", E2_0),
        emoji(&[0x1F5E8, 0xFE0F], "left speech bubble", E2_0),
        emoji(&[0x1F5EF, 0xFE0F], "right anger bubble", E0_7),
        emoji(&[0x1F4AD], "thought balloon", E1_0),
        emoji(&[0x1F4A4], "ZZZ", E0_6),
        toned(&[0x1F44B], "waving hand", E0_6),
        toned(&[0x1F91A], "raised back of hand", E3_0),
        toned(&[0x1F590, 0xFE0F], "hand with fingers splayed", E0_7),
        toned(&[0x270B], "raised hand", E0_6),
        toned(&[0x1F596], "vulcan salute", E1_0),
        toned(&[0x1F44C], "OK hand", E0_6),
        toned(&[0x270C, 0xFE0F], "victory hand", E0_6),
        toned(&[0x1F91E], "crossed fingers", E3_0),
        toned(&[0x1F91F], "love-you gesture", E5_0),
        toned(&[0x1F918], "sign of the horns", E1_0),
        toned(&[0x1F919], "call me hand", E3_0),
        toned(&[0x1F448], "backhand index pointing left", E0_6),
        toned(&[0x1F449], "backhand index pointing right", E0_6),
        toned(&[0x1F446], "backhand index pointing up", E0_6),
        toned(&[0x1F595], "middle finger", E1_0),
        toned(&[0x1F447], "backhand index pointing down", E0_6),
        toned(&[0x261D, 0xFE0F], "index pointing up", E0_6),
        toned(&[0x1F44D], "thumbs up", E0_6),
        toned(&[0x1F44E], "thumbs down", E0_6),
        toned(&[0x270A], "raised fist", E0_6),
        toned(&[0x1F44A], "oncoming fist", E0_6),
        toned(&[0x1F91B], "left-facing fist", E3_0),
        toned(&[0x1F91C], "right-facing fist", E3_0),
        toned(&[0x1F44F], "clapping hands", E0_6),
        toned(&[0x1F64C], "raising hands", E0_6),
        toned(&[0x1F450], "open hands", E0_6),
        toned(&[0x1F932], "palms up together", E5_0),
        emoji(&[0x1F91D], "handshake", E3_0),
        toned(&[0x1F64F], "folded hands", E0_6),
        toned(&[0x270D, 0xFE0F], "writing hand", E0_7),
        toned(&[0x1F485], "nail polish", E0_6),
        toned(&[0x1F933], "selfie", E3_0),
        toned(&[0x1F4AA], "flexed biceps", E0_6),
        toned(&[0x1F442], "ear", E0_6),
        toned(&[0x1F443], "nose", E0_6),
        emoji(&[0x1F9E0], "brain", E5_0),
        emoji(&[0x1F440], "eyes", E0_6),
        emoji(&[0x1F441, 0xFE0F], "eye", E0_7),
        emoji(&[0x1F445], "tongue", E0_6),
        emoji(&[0x1F444], "mouth", E0_6),
        toned(&[0x1F476], "baby", E0_6),
        toned(&[0x1F9D2], "child", E5_0),
        toned(&[0x1F466], "boy", E0_6),
        toned(&[0x1F467], "girl", E0_6),
        toned(&[0x1F9D1], "person", E5_0),
        toned(&[0x1F471], "person: blond hair", E0_6),
        toned(&[0x1F468], "man", E0_6),
        toned(&[0x1F9D4], "person: beard", E5_0),
        toned(&[0x1F469], "woman", E0_6),
        toned(&[0x1F471, 0x200D, 0x2640, 0xFE0F], "woman: blond hair", E4_0),
        toned(&[0x1F471, 0x200D, 0x2642, 0xFE0F], "man: blond hair", E4_0),
        toned(&[0x1F9D3], "older person", E5_0),
        toned(&[0x1F474], "old man", E0_6),
        toned(&[0x1F475], "old woman", E0_6),
        toned(&[0x1F64D], "person frowning", E0_6),
        toned(&[0x1F64D, 0x200D, 0x2642, 0xFE0F], "man frowning", E4_0),
        toned(&[0x1F64D, 0x200D, 0x2640, 0xFE0F], "woman frowning", E4_0),
        toned(&[0x1F64E], "person pouting", E0_6),
        toned(&[0x1F64E, 0x200D, 0x2642, 0xFE0F], "man pouting", E4_0),
        toned(&[0x1F64E, 0x200D, 0x2640, 0xFE0F], "woman pouting", E4_0),
        toned(&[0x1F645], "person gesturing NO", E0_6),
        toned(&[0x1F645, 0x200D, 0x2642, 0xFE0F], "man gesturing NO", E4_0),
        toned(&[0x1F645, 0x200D, 0x2640, 0xFE0F], "woman gesturing NO", E4_0),
        toned(&[0x1F646], "person gesturing OK", E0_6),
        toned(&[0x1F646, 0x200D, 0x2642, 0xFE0F], "man gesturing OK", E4_0),
        toned(&[0x1F646, 0x200D, 0x2640, 0xFE0F], "woman gesturing OK", E4_0),
        toned(&[0x1F481], "person tipping hand", E0_6),
        toned(&[0x1F481, 0x200D, 0x2642, 0xFE0F], "man tipping hand", E4_0),
        toned(&[0x1F481, 0x200D, 0x2640, 0xFE0F], "woman tipping hand", E4_0),
        toned(&[0x1F64B], "person raising hand", E0_6),
        toned(&[0x1F64B, 0x200D, 0x2642, 0xFE0F], "man raising hand", E4_0),
        toned(&[0x1F64B, 0x200D, 0x2640, 0xFE0F], "woman raising hand", E4_0),
        toned(&[0x1F647], "person bowing", E0_6),
        toned(&[0x1F647, 0x200D, 0x2642, 0xFE0F], "man bowing", E4_0),
        toned(&[0x1F647, 0x200D, 0x2640, 0xFE0F], "woman bowing", E4_0),
        toned(&[0x1F926], "person facepalming", E3_0),
        toned(&[0x1F926, 0x200D, 0x2642, 0xFE0F], "man facepalming", E4_0),
        toned(&[0x1F926, 0x200D, 0x2640, 0xFE0F], "woman facepalming", E4_0),
        toned(&[0x1F937], "person shrugging", E3_0),
        toned(&[0x1F937, 0x200D, 0x2642, 0xFE0F], "man shrugging", E4_0),
        toned(&[0x1F937, 0x200D, 0x2640, 0xFE0F], "woman shrugging", E4_0),
        toned(&[0x1F468, 0x200D, 0x2695, 0xFE0F], "man health worker", E4_0),
        toned(&[0x1F469, 0x200D, 0x2695, 0xFE0F], "woman health worker", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F393], "man student", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F393], "woman student", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F3EB], "man teacher", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F3EB], "woman teacher", E4_0),
        toned(&[0x1F468, 0x200D, 0x2696, 0xFE0F], "man judge", E4_0),
        toned(&[0x1F469, 0x200D, 0x2696, 0xFE0F], "woman judge", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F33E], "man farmer", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F33E], "woman farmer", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F373], "man cook", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F373], "woman cook", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F527], "man mechanic", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F527], "woman mechanic", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F3ED], "man factory worker", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F3ED], "woman factory worker", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F4BC], "man office worker", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F4BC], "woman office worker", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F52C], "man scientist", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F52C], "woman scientist", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F4BB], "man technologist", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F4BB], "woman technologist", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F3A4], "man singer", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F3A4], "woman singer", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F3A8], "man artist", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F3A8], "woman artist", E4_0),
        toned(&[0x1F468, 0x200D, 0x2708, 0xFE0F], "man pilot", E4_0),
        toned(&[0x1F469, 0x200D, 0x2708, 0xFE0F], "woman pilot", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F680], "man astronaut", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F680], "woman astronaut", E4_0),
        toned(&[0x1F468, 0x200D, 0x1F692], "man firefighter", E4_0),
        toned(&[0x1F469, 0x200D, 0x1F692], "woman firefighter", E4_0),
        toned(&[0x1F46E], "police officer", E0_6),
        toned(&[0x1F46E, 0x200D, 0x2642, 0xFE0F], "man police officer", E4_0),
        toned(&[0x1F46E, 0x200D, 0x2640, 0xFE0F], "woman police officer", E4_0),
        toned(&[0x1F575, 0xFE0F], "detective", E0_7),
        toned(&[0x1F575, 0xFE0F, 0x200D, 0x2642, 0xFE0F], "man detective", E4_0),
        toned(&[0x1F575, 0xFE0F, 0x200D, 0x2640, 0xFE0F], "woman detective", E4_0),
        toned(&[0x1F482], "guard", E0_6),
        toned(&[0x1F482, 0x200D, 0x2642, 0xFE0F], "man guard", E4_0),
        toned(&[0x1F482, 0x200D, 0x2640, 0xFE0F], "woman guard", E4_0),
        toned(&[0x1F477], "construction worker", E0_6),
        toned(&[0x1F477, 0x200D, 0x2642, 0xFE0F], "man construction worker", E4_0),
        toned(&[0x1F477, 0x200D, 0x2640, 0xFE0F], "woman construction worker", E4_0),
        toned(&[0x1F934], "prince", E3_0),
        toned(&[0x1F478], "princess", E0_6),
        toned(&[0x1F473], "person wearing turban", E0_6),
        toned(&[0x1F473, 0x200D, 0x2642, 0xFE0F], "man wearing turban", E4_0),
        toned(&[0x1F473, 0x200D, 0x2640, 0xFE0F], "woman wearing turban", E4_0),
        toned(&[0x1F472], "person with skullcap", E0_6),
        toned(&[0x1F9D5], "woman with headscarf", E5_0),
        toned(&[0x1F935], "person in tuxedo", E3_0),
        toned(&[0x1F470], "person with veil", E0_6),
        toned(&[0x1F930], "pregnant woman", E3_0),
        toned(&[0x1F931], "breast-feeding", E5_0),
        toned(&[0x1F47C], "baby angel", E0_6),
        toned(&[0x1F385], "Santa Claus", E0_6),
        toned(&[0x1F936], "Mrs. Claus", E3_0),
        toned(&[0x1F9D9], "mage", E5_0),
        toned(&[0x1F9D9, 0x200D, 0x2642, 0xFE0F], "man mage", E5_0),
        toned(&[0x1F9D9, 0x200D, 0x2640, 0xFE0F], "woman mage", E5_0),
        toned(&[0x1F9DA], "fairy", E5_0),
        toned(&[0x1F9DA, 0x200D, 0x2642, 0xFE0F], "man fairy", E5_0),
        toned(&[0x1F9DA, 0x200D, 0x2640, 0xFE0F], "woman fairy", E5_0),
        toned(&[0x1F9DB], "vampire", E5_0),
        toned(&[0x1F9DB, 0x200D, 0x2642, 0xFE0F], "man vampire", E5_0),
        toned(&[0x1F9DB, 0x200D, 0x2640, 0xFE0F], "woman vampire", E5_0),
        toned(&[0x1F9DC], "merperson", E5_0),
        toned(&[0x1F9DC, 0x200D, 0x2642, 0xFE0F], "merman", E5_0),
        toned(&[0x1F9DC, 0x200D, 0x2640, 0xFE0F], "mermaid", E5_0),
        toned(&[0x1F9DD], "elf", E5_0),
        toned(&[0x1F9DD, 0x200D, 0x2642, 0xFE0F], "man elf", E5_0),
        toned(&[0x1F9DD, 0x200D, 0x2640, 0xFE0F], "woman elf", E5_0),
        emoji(&[0x1F9DE], "genie", E5_0),
        emoji(&[0x1F9DE, 0x200D, 0x2642, 0xFE0F], "man genie", E5_0),
        emoji(&[0x1F9DE, 0x200D, 0x2640, 0xFE0F], "woman genie", E5_0),
        emoji(&[0x1F9DF], "zombie", E5_0),
        emoji(&[0x1F9DF, 0x200D, 0x2642, 0xFE0F], "man zombie", E5_0),
        emoji(&[0x1F9DF, 0x200D, 0x2640, 0xFE0F], "woman zombie", E5_0),
        toned(&[0x1F486], "person getting massage", E0_6),
        toned(&[0x1F486, 0x200D, 0x2642, 0xFE0F], "man getting massage", E4_0),
        toned(&[0x1F486, 0x200D, 0x2640, 0xFE0F], "woman getting massage", E4_0),
        toned(&[0x1F487], "person getting haircut", E0_6),
        toned(&[0x1F487, 0x200D, 0x2642, 0xFE0F], "man getting haircut", E4_0),
        toned(&[0x1F487, 0x200D, 0x2640, 0xFE0F], "woman getting haircut", E4_0),
        toned(&[0x1F6B6], "person walking", E0_6),
        toned(&[0x1F6B6, 0x200D, 0x2642, 0xFE0F], "man walking", E4_0),
        toned(&[0x1F6B6, 0x200D, 0x2640, 0xFE0F], "woman walking", E4_0),
        toned(&[0x1F3C3], "person running", E0_6),
        toned(&[0x1F3C3, 0x200D, 0x2642, 0xFE0F], "man running", E4_0),
        toned(&[0x1F3C3, 0x200D, 0x2640, 0xFE0F], "woman running", E4_0),
        toned(&[0x1F483], "woman dancing", E0_6),
        toned(&[0x1F57A], "man dancing", E3_0),
        toned(&[0x1F574, 0xFE0F], "person in suit levitating", E0_7),
        emoji(&[0x1F46F], "people with bunny ears", E0_6),
        emoji(&[0x1F46F, 0x200D, 0x2642, 0xFE0F], "men with bunny ears", E4_0),
        emoji(&[0x1F46F, 0x200D, 0x2640, 0xFE0F], "women with bunny ears", E4_0),
        toned(&[0x1F9D6], "person in steamy room", E5_0),
        toned(&[0x1F9D6, 0x200D, 0x2642, 0xFE0F], "man in steamy room", E5_0),
        toned(&[0x1F9D6, 0x200D, 0x2640, 0xFE0F], "woman in steamy room", E5_0),
        toned(&[0x1F9D7], "person climbing", E5_0),
        toned(&[0x1F9D7, 0x200D, 0x2642, 0xFE0F], "man climbing", E5_0),
        toned(&[0x1F9D7, 0x200D, 0x2640, 0xFE0F], "woman climbing", E5_0),
        emoji(&[0x1F93A], "person fencing", E3_0),
        toned(&[0x1F3C7], "horse racing", E1_0),
        emoji(&[0x26F7, 0xFE0F], "skier", E0_7),
        toned(&[0x1F3C2], "snowboarder", E0_6),
        toned(&[0x1F3CC, 0xFE0F], "person golfing", E0_7),
        toned(&[0x1F3CC, 0xFE0F, 0x200D, 0x2642, 0xFE0F], "man golfing", E4_0),
        toned(&[0x1F3CC, 0xFE0F, 0x200D, 0x2640, 0xFE0F], "woman golfing", E4_0),
        toned(&[0x1F3C4], "person surfing", E0_6),
        toned(&[0x1F3C4, 0x200D, 0x2642, 0xFE0F], "man surfing", E4_0),
        toned(&[0x1F3C4, 0x200D, 0x2640, 0xFE0F], "woman surfing", E4_0),
        toned(&[0x1F6A3], "person rowing boat", E1_0),
        toned(&[0x1F6A3, 0x200D, 0x2642, 0xFE0F], "man rowing boat", E4_0),
        toned(&[0x1F6A3, 0x200D, 0x2640, 0xFE0F], "woman rowing boat", E4_0),
        toned(&[0x1F3CA], "person swimming", E0_6),
        toned(&[0x1F3CA, 0x200D, 0x2642, 0xFE0F], "man swimming", E4_0),
        toned(&[0x1F3CA, 0x200D, 0x2640, 0xFE0F], "woman swimming", E4_0),
        toned(&[0x26F9, 0xFE0F], "person bouncing ball", E0_7),
        toned(&[0x26F9, 0xFE0F, 0x200D, 0x2642, 0xFE0F], "man bouncing ball", E4_0),
        toned(&[0x26F9, 0xFE0F, 0x200D, 0x2640, 0xFE0F], "woman bouncing ball", E4_0),
        toned(&[0x1F3CB, 0xFE0F], "person lifting weights", E0_7),
        toned(&[0x1F3CB, 0xFE0F, 0x200D, 0x2642, 0xFE0F], "man lifting weights", E4_0),
        toned(&[0x1F3CB, 0xFE0F, 0x200D, 0x2640, 0xFE0F], "woman lifting weights", E4_0),
        toned(&[0x1F6B4], "person biking", E1_0),
        toned(&[0x1F6B4, 0x200D, 0x2642, 0xFE0F], "man biking", E4_0),
        toned(&[0x1F6B4, 0x200D, 0x2640, 0xFE0F], "woman biking", E4_0),
        toned(&[0x1F6B5], "person mountain biking", E1_0),
        toned(&[0x1F6B5, 0x200D, 0x2642, 0xFE0F], "man mountain biking", E4_0),
        toned(&[0x1F6B5, 0x200D, 0x2640, 0xFE0F], "woman mountain biking", E4_0),
        toned(&[0x1F938], "person cartwheeling", E3_0),
        toned(&[0x1F938, 0x200D, 0x2642, 0xFE0F], "man cartwheeling", E4_0),
        toned(&[0x1F938, 0x200D, 0x2640, 0xFE0F], "woman cartwheeling", E4_0),
        emoji(&[0x1F93C], "people wrestling", E3_0),
        emoji(&[0x1F93C, 0x200D, 0x2642, 0xFE0F], "men wrestling", E4_0),
        emoji(&[0x1F93C, 0x200D, 0x2640, 0xFE0F], "women wrestling", E4_0),
        toned(&[0x1F93D], "person playing water polo", E3_0),
        toned(&[0x1F93D, 0x200D, 0x2642, 0xFE0F], "man playing water polo", E4_0),
        toned(&[0x1F93D, 0x200D, 0x2640, 0xFE0F], "woman playing water polo", E4_0),
        toned(&[0x1F93E], "person playing handball", E3_0),
        toned(&[0x1F93E, 0x200D, 0x2642, 0xFE0F], "man playing handball", E4_0),
        toned(&[0x1F93E, 0x200D, 0x2640, 0xFE0F], "woman playing handball", E4_0),
        toned(&[0x1F939], "person juggling", E3_0),
        toned(&[0x1F939, 0x200D, 0x2642, 0xFE0F], "man juggling", E4_0),
        toned(&[0x1F939, 0x200D, 0x2640, 0xFE0F], "woman juggling", E4_0),
        toned(&[0x1F9D8], "person in lotus position", E5_0),
        toned(&[0x1F9D8, 0x200D, 0x2642, 0xFE0F], "man in lotus position", E5_0),
        toned(&[0x1F9D8, 0x200D, 0x2640, 0xFE0F], "woman in lotus position", E5_0),
        toned(&[0x1F6C0], "person taking bath", E0_6),
        toned(&[0x1F6CC], "person in bed", E1_0),
        emoji(&[0x1F46D], "women holding hands", E1_0),
        emoji(&[0x1F46B], "woman and man holding hands", E0_6),
        emoji(&[0x1F46C], "men holding hands", E1_0),
        emoji(&[0x1F48F], "kiss", E0_6),
        emoji(&[0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468], "kiss: woman, man", E2_0),
        emoji(&[0x1F468, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468], "kiss: man, man", E2_0),
        emoji(&[0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469], "kiss: woman, woman", E2_0),
        emoji(&[0x1F491], "couple with heart", E0_6),
        emoji(&[0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468], "couple with heart: woman, man", E2_0),
        emoji(&[0x1F468, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468], "couple with heart: man, man", E2_0),
        emoji(&[0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469], "couple with heart: woman, woman", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F466], "family: man, woman, boy", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467], "family: man, woman, girl", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466], "family: man, woman, girl, boy", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F466, 0x200D, 0x1F466], "family: man, woman, boy, boy", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F467], "family: man, woman, girl, girl", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F466], "family: man, man, boy", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F467], "family: man, man, girl", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F467, 0x200D, 0x1F466], "family: man, man, girl, boy", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F466, 0x200D, 0x1F466], "family: man, man, boy, boy", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F467, 0x200D, 0x1F467], "family: man, man, girl, girl", E2_0),
        emoji(&[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F466], "family: woman, woman, boy", E2_0),
        emoji(&[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F467], "family: woman, woman, girl", E2_0),
        emoji(&[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466], "family: woman, woman, girl, boy", E2_0),
        emoji(&[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F466, 0x200D, 0x1F466], "family: woman, woman, boy, boy", E2_0),
        emoji(&[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F467], "family: woman, woman, girl, girl", E2_0),
        emoji(&[0x1F468, 0x200D, 0x1F466], "family: man, boy", E4_0),
        emoji(&[0x1F468, 0x200D, 0x1F466, 0x200D, 0x1F466], "family: man, boy, boy", E4_0),
        emoji(&[0x1F468, 0x200D, 0x1F467], "family: man, girl", E4_0),
        emoji(&[0x1F468, 0x200D, 0x1F467, 0x200D, 0x1F466], "family: man, girl, boy", E4_0),
        emoji(&[0x1F468, 0x200D, 0x1F467, 0x200D, 0x1F467], "family: man, girl, girl", E4_0),
        emoji(&[0x1F469, 0x200D, 0x1F466], "family: woman, boy", E4_0),
        emoji(&[0x1F469, 0x200D, 0x1F466, 0x200D, 0x1F466], "family: woman, boy, boy", E4_0),
        emoji(&[0x1F469, 0x200D, 0x1F467], "family: woman, girl", E4_0),
        emoji(&[0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466], "family: woman, girl, boy", E4_0),
        emoji(&[0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F467], "family: woman, girl, girl", E4_0),
        emoji(&[0x1F5E3, 0xFE0F], "speaking head", E0_7),
        emoji(&[0x1F464], "bust in silhouette", E0_6),
        emoji(&[0x1F465], "busts in silhouette", E1_0),
        emoji(&[0x1F46A], "family", E0_6),
        emoji(&[0x1F463], "footprints", E0_6),
    ]),
    (Nature, &[
        emoji(&[0x1F435], "monkey face", E0_6),
        emoji(&[0x1F412], "monkey", E0_6),
        emoji(&[0x1F98D], "gorilla", E3_0),
        emoji(&[0x1F436], "dog face", E0_6),
        emoji(&[0x1F415], "dog", E0_7),
        emoji(&[0x1F429], "poodle", E0_6),
        emoji(&[0x1F43A], "wolf", E0_6),
        emoji(&[0x1F98A], "fox", E3_0),
        emoji(&[0x1F431], "cat face", E0_6),
        emoji(&[0x1F408], "cat", E0_7),
        emoji(&[0x1F981], "lion", E1_0),
        emoji(&[0x1F42F], "tiger face", E0_6),
        emoji(&[0x1F405], "tiger", E1_0),
        emoji(&[0x1F406], "leopard", E1_0),
        emoji(&[0x1F434], "horse face", E0_6),
        emoji(&[0x1F40E], "horse", E0_6),
        emoji(&[0x1F984], "unicorn", E1_0),
        emoji(&[0x1F993], "zebra", E5_0),
        emoji(&[0x1F98C], "deer", E3_0),
        emoji(&[0x1F42E], "cow face", E0_6),
        emoji(&[0x1F402], "ox", E1_0),
        emoji(&[0x1F403], "water buffalo", E1_0),
        emoji(&[0x1F404], "cow", E1_0),
        emoji(&[0x1F437], "pig face", E0_6),
        emoji(&[0x1F416], "pig", E1_0),
        emoji(&[0x1F417], "boar", E0_6),
        emoji(&[0x1F43D], "pig nose", E0_6),
        emoji(&[0x1F40F], "ram", E1_0),
        emoji(&[0x1F411], "ewe", E0_6),
        emoji(&[0x1F410], "goat", E1_0),
        emoji(&[0x1F42A], "camel", E1_0),
        emoji(&[0x1F42B], "two-hump camel", E0_6),
        emoji(&[0x1F992], "giraffe", E5_0),
        emoji(&[0x1F418], "elephant", E0_6),
        emoji(&[0x1F98F], "rhinoceros", E3_0),
        emoji(&[0x1F42D], "mouse face", E0_6),
        emoji(&[0x1F401], "mouse", E1_0),
        emoji(&[0x1F400], "rat", E1_0),
        emoji(&[0x1F439], "hamster", E0_6),
        emoji(&[0x1F430], "rabbit face", E0_6),
        emoji(&[0x1F407], "rabbit", E1_0),
        emoji(&[0x1F43F, 0xFE0F], "chipmunk", E0_7),
        emoji(&[0x1F994], "hedgehog", E5_0),
        emoji(&[0x1F987], "bat", E3_0),
        emoji(&[0x1F43B], "bear", E0_6),
        emoji(&[0x1F428], "koala", E0_6),
        emoji(&[0x1F43C], "panda", E0_6),
        emoji(&[0x1F43E], "paw prints", E0_6),
        emoji(&[0x1F983], "turkey", E1_0),
        emoji(&[0x1F414], "chicken", E0_6),
        emoji(&[0x1F413], "rooster", E1_0),
        emoji(&[0x1F423], "hatching chick", E0_6),
        emoji(&[0x1F424], "baby chick", E0_6),
        emoji(&[0x1F425], "front-facing baby chick", E0_6),
        emoji(&[0x1F426], "bird", E0_6),
        emoji(&[0x1F427], "penguin", E0_6),
        emoji(&[0x1F54A, 0xFE0F], "dove", E0_7),
        emoji(&[0x1F985], "eagle", E3_0),
        emoji(&[0x1F986], "duck", E3_0),
        emoji(&[0x1F989], "owl", E3_0),
        emoji(&[0x1F438], "frog", E0_6),
        emoji(&[0x1F40A], "crocodile", E1_0),
        emoji(&[0x1F422], "turtle", E0_6),
        emoji(&[0x1F98E], "lizard", E3_0),
        emoji(&[0x1F40D], "snake", E0_6),
        emoji(&[0x1F432], "dragon face", E0_6),
        emoji(&[0x1F409], "dragon", E1_0),
        emoji(&[0x1F995], "sauropod", E5_0),
        emoji(&[0x1F996], "T-Rex", E5_0),
        emoji(&[0x1F433], "spouting whale", E0_6),
        emoji(&[0x1F40B], "whale", E1_0),
        emoji(&[0x1F42C], "dolphin", E0_6),
        emoji(&[0x1F41F], "fish", E0_6),
        emoji(&[0x1F420], "tropical fish", E0_6),
        emoji(&[0x1F421], "blowfish", E0_6),
        emoji(&[0x1F988], "shark", E3_0),
        emoji(&[0x1F419], "octopus", E0_6),
        emoji(&[0x1F41A], "spiral shell", E0_6),
        emoji(&[0x1F980], "crab", E1_0),
        emoji(&[0x1F990], "shrimp", E3_0),
        emoji(&[0x1F991], "squid", E3_0),
        emoji(&[0x1F40C], "snail", E0_6),
        emoji(&[0x1F98B], "butterfly", E3_0),
        emoji(&[0x1F41B], "bug", E0_6),
        emoji(&[0x1F41C], "ant", E0_6),
        emoji(&[0x1F41D], "honeybee", E0_6),
        emoji(&[0x1F41E], "lady beetle", E0_6),
        emoji(&[0x1F997], "cricket", E5_0),
        emoji(&[0x1F577, 0xFE0F], "spider", E0_7),
        emoji(&[0x1F578, 0xFE0F], "spider web", E0_7),
        emoji(&[0x1F982], "scorpion", E1_0),
        emoji(&[0x1F490], "bouquet", E0_6),
        emoji(&[0x1F338], "cherry blossom", E0_6),
        emoji(&[0x1F4AE], "white flower", E0_6),
        emoji(&[0x1F3F5, 0xFE0F], "rosette", E0_7),
        emoji(&[0x1F339], "rose", E0_6),
        emoji(&[0x1F940], "wilted flower", E3_0),
        emoji(&[0x1F33A], "hibiscus", E0_6),
        emoji(&[0x1F33B], "sunflower", E0_6),
        emoji(&[0x1F33C], "blossom", E0_6),
        emoji(&[0x1F337], "tulip", E0_6),
        emoji(&[0x1F331], "seedling", E0_6),
        emoji(&[0x1F332], "evergreen tree", E1_0),
        emoji(&[0x1F333], "deciduous tree", E1_0),
        emoji(&[0x1F334], "palm tree", E0_6),
        emoji(&[0x1F335], "cactus", E0_6),
        emoji(&[0x1F33E], "sheaf of rice", E0_6),
        emoji(&[0x1F33F], "herb", E0_6),
        emoji(&[0x2618, 0xFE0F], "shamrock", E1_0),
        emoji(&[0x1F340], "four leaf clover", E0_6),
        emoji(&[0x1F341], "maple leaf", E0_6),
        emoji(&[0x1F342], "fallen leaf", E0_6),
        emoji(&[0x1F343], "leaf fluttering in wind", E0_6),
        emoji(&[0x1F344], "mushroom", E0_6),
    ]),
    (FoodAndDrink, &[
        emoji(&[0x1F347], "grapes", E0_6),
        emoji(&[0x1F348], "melon", E0_6),
        emoji(&[0x1F349], "watermelon", E0_6),
        emoji(&[0x1F34A], "tangerine", E0_6),
        emoji(&[0x1F34B], "lemon", E1_0),
        emoji(&[0x1F34C], "banana", E0_6),
        emoji(&[0x1F34D], "pineapple", E0_6),
        emoji(&[0x1F34E], "red apple", E0_6),
        emoji(&[0x1F34F], "green apple", E0_6),
        emoji(&[0x1F350], "pear", E1_0),
        emoji(&[0x1F351], "peach", E0_6),
        emoji(&[0x1F352], "cherries", E0_6),
        emoji(&[0x1F353], "strawberry", E0_6),
        emoji(&[0x1F95D], "kiwi fruit", E3_0),
        emoji(&[0x1F345], "tomato", E0_6),
        emoji(&[0x1F965], "coconut", E5_0),
        emoji(&[0x1F951], "avocado", E3_0),
        emoji(&[0x1F346], "eggplant", E0_6),
        emoji(&[0x1F954], "potato", E3_0),
        emoji(&[0x1F955], "carrot", E3_0),
        emoji(&[0x1F33D], "ear of corn", E0_6),
        emoji(&[0x1F336, 0xFE0F], "hot pepper", E0_7),
        emoji(&[0x1F952], "cucumber", E3_0),
        emoji(&[0x1F966], "broccoli", E5_0),
        emoji(&[0x1F95C], "peanuts", E3_0),
        emoji(&[0x1F330], "chestnut", E0_6),
        emoji(&[0x1F35E], "bread", E0_6),
        emoji(&[0x1F950], "croissant", E3_0),
        emoji(&[0x1F956], "baguette bread", E3_0),
        emoji(&[0x1F968], "pretzel", E5_0),
        emoji(&[0x1F95E], "pancakes", E3_0),
        emoji(&[0x1F9C0], "cheese wedge", E1_0),
        emoji(&[0x1F356], "meat on bone", E0_6),
        emoji(&[0x1F357], "poultry leg", E0_6),
        emoji(&[0x1F969], "cut of meat", E5_0),
        emoji(&[0x1F953], "bacon", E3_0),
        emoji(&[0x1F354], "hamburger", E0_6),
        emoji(&[0x1F35F], "french fries", E0_6),
        emoji(&[0x1F355], "pizza", E0_6),
        emoji(&[0x1F32D], "hot dog", E1_0),
        emoji(&[0x1F96A], "sandwich", E5_0),
        emoji(&[0x1F32E], "taco", E1_0),
        emoji(&[0x1F32F], "burrito", E1_0),
        emoji(&[0x1F959], "stuffed flatbread", E3_0),
        emoji(&[0x1F95A], "egg", E3_0),
        emoji(&[0x1F373], "cooking", E0_6),
        emoji(&[0x1F958], "shallow pan of food", E3_0),
        emoji(&[0x1F372], "pot of food", E0_6),
        emoji(&[0x1F963], "bowl with spoon", E5_0),
        emoji(&[0x1F957], "green salad", E3_0),
        emoji(&[0x1F37F], "popcorn", E1_0),
        emoji(&[0x1F96B], "canned food", E5_0),
        emoji(&[0x1F371], "bento box", E0_6),
        emoji(&[0x1F358], "rice cracker", E0_6),
        emoji(&[0x1F359], "rice ball", E0_6),
        emoji(&[0x1F35A], "cooked rice", E0_6),
        emoji(&[0x1F35B], "curry rice", E0_6),
        emoji(&[0x1F35C], "steaming bowl", E0_6),
        emoji(&[0x1F35D], "spaghetti", E0_6),
        emoji(&[0x1F360], "roasted sweet potato", E0_6),
        emoji(&[0x1F362], "oden", E0_6),
        emoji(&[0x1F363], "sushi", E0_6),
        emoji(&[0x1F364], "fried shrimp", E0_6),
        emoji(&[0x1F365], "fish cake with swirl", E0_6),
        emoji(&[0x1F361], "dango", E0_6),
        emoji(&[0x1F95F], "dumpling", E5_0),
        emoji(&[0x1F960], "fortune cookie", E5_0),
        emoji(&[0x1F961], "takeout box", E5_0),
        emoji(&[0x1F366], "soft ice cream", E0_6),
        emoji(&[0x1F367], "shaved ice", E0_6),
        emoji(&[0x1F368], "ice cream", E0_6),
        emoji(&[0x1F369], "doughnut", E0_6),
        emoji(&[0x1F36A], "cookie", E0_6),
        emoji(&[0x1F382], "birthday cake", E0_6),
        emoji(&[0x1F370], "shortcake", E0_6),
        emoji(&[0x1F967], "pie", E5_0),
        emoji(&[0x1F36B], "chocolate bar", E0_6),
        emoji(&[0x1F36C], "candy", E0_6),
        emoji(&[0x1F36D], "lollipop", E0_6),
        emoji(&[0x1F36E], "custard", E0_6),
        emoji(&[0x1F36F], "honey pot", E0_6),
        emoji(&[0x1F37C], "baby bottle", E1_0),
        emoji(&[0x1F95B], "glass of milk", E3_0),
        emoji(&[0x2615], "hot beverage", E0_6),
        emoji(&[0x1F375], "teacup without handle", E0_6),
        emoji(&[0x1F376], "sake", E0_6),
        emoji(&[0x1F37E], "bottle with popping cork", E1_0),
        emoji(&[0x1F377], "wine glass", E0_6),
        emoji(&[0x1F378], "cocktail glass", E0_6),
        emoji(&[0x1F379], "tropical drink", E0_6),
        emoji(&[0x1F37A], "beer mug", E0_6),
        emoji(&[0x1F37B], "clinking beer mugs", E0_6),
        emoji(&[0x1F942], "clinking glasses", E3_0),
        emoji(&[0x1F943], "tumbler glass", E3_0),
        emoji(&[0x1F964], "cup with straw", E5_0),
        emoji(&[0x1F962], "chopsticks", E5_0),
        emoji(&[0x1F37D, 0xFE0F], "fork and knife with plate", E0_7),
        emoji(&[0x1F374], "fork and knife", E0_6),
        emoji(&[0x1F944], "spoon", E3_0),
        emoji(&[0x1F52A], "kitchen knife", E0_6),
        emoji(&[0x1F3FA], "amphora", E1_0),
    ]),
    (Activity, &[
        emoji(&[0x1F383], "jack-o-lantern", E0_6),
        emoji(&[0x1F384], "Christmas tree", E0_6),
        emoji(&[0x1F386], "fireworks", E0_6),
        emoji(&[0x1F387], "sparkler", E0_6),
        emoji(&[0x2728], "sparkles", E0_6),
        emoji(&[0x1F388], "balloon", E0_6),
        emoji(&[0x1F389], "party popper", E0_6),
        emoji(&[0x1F38A], "confetti ball", E0_6),
        emoji(&[0x1F38B], "tanabata tree", E0_6),
        emoji(&[0x1F38D], "pine decoration", E0_6),
        emoji(&[0x1F38E], "Japanese dolls", E0_6),
        emoji(&[0x1F38F], "carp streamer", E0_6),
        emoji(&[0x1F390], "wind chime", E0_6),
        emoji(&[0x1F391], "moon viewing ceremony", E0_6),
        emoji(&[0x1F380], "ribbon", E0_6),
        emoji(&[0x1F381], "wrapped gift", E0_6),
        emoji(&[0x1F397, 0xFE0F], "reminder ribbon", E0_7),
        emoji(&[0x1F39F, 0xFE0F], "admission tickets", E0_7),
        emoji(&[0x1F3AB], "ticket", E0_6),
        emoji(&[0x1F396, 0xFE0F], "military medal", E0_7),
        emoji(&[0x1F3C6], "trophy", E0_6),
        emoji(&[0x1F3C5], "sports medal", E1_0),
        emoji(&[0x1F947], "1st place medal", E3_0),
        emoji(&[0x1F948], "2nd place medal", E3_0),
        emoji(&[0x1F949], "3rd place medal", E3_0),
        emoji(&[0x26BD], "soccer ball", E0_6),
        emoji(&[0x26BE], "baseball", E0_6),
        emoji(&[0x1F3C0], "basketball", E0_6),
        emoji(&[0x1F3D0], "volleyball", E1_0),
        emoji(&[0x1F3C8], "american football", E0_6),
        emoji(&[0x1F3C9], "rugby football", E1_0),
        emoji(&[0x1F3BE], "tennis", E0_6),
        emoji(&[0x1F3B3], "bowling", E0_6),
        emoji(&[0x1F3CF], "cricket game", E1_0),
        emoji(&[0x1F3D1], "field hockey", E1_0),
        emoji(&[0x1F3D2], "ice hockey", E1_0),
        emoji(&[0x1F3D3], "ping pong", E1_0),
        emoji(&[0x1F3F8], "badminton", E1_0),
        emoji(&[0x1F94A], "boxing glove", E3_0),
        emoji(&[0x1F94B], "martial arts uniform", E3_0),
        emoji(&[0x1F945], "goal net", E3_0),
        emoji(&[0x26F3], "flag in hole", E0_6),
        emoji(&[0x26F8, 0xFE0F], "ice skate", E0_7),
        emoji(&[0x1F3A3], "fishing pole", E0_6),
        emoji(&[0x1F3BD], "running shirt", E0_6),
        emoji(&[0x1F3BF], "skis", E0_6),
        emoji(&[0x1F6F7], "sled", E5_0),
        emoji(&[0x1F94C], "curling stone", E5_0),
        emoji(&[0x1F3AF], "bullseye", E0_6),
        emoji(&[0x1F52B], "water pistol", E0_6),
        emoji(&[0x1F3B1], "pool 8 ball", E0_6),
        emoji(&[0x1F52E], "crystal ball", E0_6),
        emoji(&[0x1F3AE], "video game", E0_6),
        emoji(&[0x1F579, 0xFE0F], "joystick", E0_7),
        emoji(&[0x1F3B0], "slot machine", E0_6),
        emoji(&[0x1F3B2], "game die", E0_6),
        emoji(&[0x2660, 0xFE0F], "spade suit", E0_6),
        emoji(&[0x2665, 0xFE0F], "heart suit", E0_6),
        emoji(&[0x2666, 0xFE0F], "diamond suit", E0_6),
        emoji(&[0x2663, 0xFE0F], "club suit", E0_6),
        emoji(&[0x1F0CF], "joker", E0_6),
        emoji(&[0x1F004], "mahjong red dragon", E0_6),
        emoji(&[0x1F3B4], "flower playing cards", E0_6),
        emoji(&[0x1F3AD], "performing arts", E0_6),
        emoji(&[0x1F5BC, 0xFE0F], "framed picture", E0_7),
        emoji(&[0x1F3A8], "artist palette", E0_6),
    ]),
    (TravelAndPlaces, &[
        emoji(&[0x1F30D], "globe showing Europe-Africa", E0_7),
        emoji(&[0x1F30E], "globe showing Americas", E0_7),
        emoji(&[0x1F30F], "globe showing Asia-Australia", E0_6),
        emoji(&[0x1F310], "globe with meridians", E1_0),
        emoji(&[0x1F5FA, 0xFE0F], "world map", E0_7),
        emoji(&[0x1F5FE], "map of Japan", E0_6),
        emoji(&[0x1F3D4, 0xFE0F], "snow-capped mountain", E0_7),
        emoji(&[0x26F0, 0xFE0F], "mountain", E0_7),
        emoji(&[0x1F30B], "volcano", E0_6),
        emoji(&[0x1F5FB], "mount fuji", E0_6),
        emoji(&[0x1F3D5, 0xFE0F], "camping", E0_7),
        emoji(&[0x1F3D6, 0xFE0F], "beach with umbrella", E0_7),
        emoji(&[0x1F3DC, 0xFE0F], "desert", E0_7),
        emoji(&[0x1F3DD, 0xFE0F], "desert island", E0_7),
        emoji(&[0x1F3DE, 0xFE0F], "national park", E0_7),
        emoji(&[0x1F3DF, 0xFE0F], "stadium", E0_7),
        emoji(&[0x1F3DB, 0xFE0F], "classical building", E0_7),
        emoji(&[0x1F3D7, 0xFE0F], "building construction", E0_7),
        emoji(&[0x1F3D8, 0xFE0F], "houses", E0_7),
        emoji(&[0x1F3DA, 0xFE0F], "derelict house", E0_7),
        emoji(&[0x1F3E0], "house", E0_6),
        emoji(&[0x1F3E1], "house with garden", E0_6),
        emoji(&[0x1F3E2], "office building", E0_6),
        emoji(&[0x1F3E3], "Japanese post office", E0_6),
        emoji(&[0x1F3E4], "post office", E1_0),
        emoji(&[0x1F3E5], "hospital", E0_6),
        emoji(&[0x1F3E6], "bank", E0_6),
        emoji(&[0x1F3E8], "hotel", E0_6),
        emoji(&[0x1F3E9], "love hotel", E0_6),
        emoji(&[0x1F3EA], "convenience store", E0_6),
        emoji(&[0x1F3EB], "school", E0_6),
        emoji(&[0x1F3EC], "department store", E0_6),
        emoji(&[0x1F3ED], "factory", E0_6),
        emoji(&[0x1F3EF], "Japanese castle", E0_6),
        emoji(&[0x1F3F0], "castle", E0_6),
        emoji(&[0x1F492], "wedding", E0_6),
        emoji(&[0x1F5FC], "Tokyo tower", E0_6),
        emoji(&[0x1F5FD], "Statue of Liberty", E0_6),
        emoji(&[0x26EA], "church", E0_6),
        emoji(&[0x1F54C], "mosque", E1_0),
        emoji(&[0x1F54D], "synagogue", E1_0),
        emoji(&[0x26E9, 0xFE0F], "shinto shrine", E0_7),
        emoji(&[0x1F54B], "kaaba", E1_0),
        emoji(&[0x26F2], "fountain", E0_6),
        emoji(&[0x26FA], "tent", E0_6),
        emoji(&[0x1F301], "foggy", E0_6),
        emoji(&[0x1F303], "night with stars", E0_6),
        emoji(&[0x1F3D9, 0xFE0F], "cityscape", E0_7),
        emoji(&[0x1F304], "sunrise over mountains", E0_6),
        emoji(&[0x1F305], "sunrise", E0_6),
        emoji(&[0x1F306], "cityscape at dusk", E0_6),
        emoji(&[0x1F307], "sunset", E0_6),
        emoji(&[0x1F309], "bridge at night", E0_6),
        emoji(&[0x2668, 0xFE0F], "hot springs", E0_6),
        emoji(&[0x1F3A0], "carousel horse", E0_6),
        emoji(&[0x1F3A1], "ferris wheel", E0_6),
        emoji(&[0x1F3A2], "roller coaster", E0_6),
        emoji(&[0x1F488], "barber pole", E0_6),
        emoji(&[0x1F3AA], "circus tent", E0_6),
        emoji(&[0x1F682], "locomotive", E1_0),
        emoji(&[0x1F683], "railway car", E0_6),
        emoji(&[0x1F684], "high-speed train", E0_6),
        emoji(&[0x1F685], "bullet train", E0_6),
        emoji(&[0x1F686], "train", E1_0),
        emoji(&[0x1F687], "metro", E0_6),
        emoji(&[0x1F688], "light rail", E1_0),
        emoji(&[0x1F689], "station", E0_6),
        emoji(&[0x1F68A], "tram", E1_0),
        emoji(&[0x1F69D], "monorail", E1_0),
        emoji(&[0x1F69E], "mountain railway", E1_0),
        emoji(&[0x1F68B], "tram car", E1_0),
        emoji(&[0x1F68C], "bus", E0_6),
        emoji(&[0x1F68D], "oncoming bus", E0_7),
        emoji(&[0x1F68E], "trolleybus", E1_0),
        emoji(&[0x1F690], "minibus", E1_0),
        emoji(&[0x1F691], "ambulance", E0_6),
        emoji(&[0x1F692], "fire engine", E0_6),
        emoji(&[0x1F693], "police car", E0_6),
        emoji(&[0x1F694], "oncoming police car", E0_7),
        emoji(&[0x1F695], "taxi", E0_6),
        emoji(&[0x1F696], "oncoming taxi", E1_0),
        emoji(&[0x1F697], "automobile", E0_6),
        emoji(&[0x1F698], "oncoming automobile", E0_7),
        emoji(&[0x1F699], "sport utility vehicle", E0_6),
        emoji(&[0x1F69A], "delivery truck", E0_6),
        emoji(&[0x1F69B], "articulated lorry", E1_0),
        emoji(&[0x1F69C], "tractor", E1_0),
        emoji(&[0x1F3CE, 0xFE0F], "racing car", E0_7),
        emoji(&[0x1F3CD, 0xFE0F], "motorcycle", E0_7),
        emoji(&[0x1F6F5], "motor scooter", E3_0),
        emoji(&[0x1F6B2], "bicycle", E0_6),
        emoji(&[0x1F6F4], "kick scooter", E3_0),
        emoji(&[0x1F68F], "bus stop", E0_6),
        emoji(&[0x1F6E3, 0xFE0F], "motorway", E0_7),
        emoji(&[0x1F6E4, 0xFE0F], "railway track", E0_7),
        emoji(&[0x1F6E2, 0xFE0F], "oil drum", E0_7),
        emoji(&[0x26FD], "fuel pump", E0_6),
        emoji(&[0x1F6A8], "police car light", E0_6),
        emoji(&[0x1F6A5], "horizontal traffic light", E0_6),
        emoji(&[0x1F6A6], "vertical traffic light", E1_0),
        emoji(&[0x1F6D1], "stop sign", E3_0),
        emoji(&[0x1F6A7], "construction", E0_6),
        emoji(&[0x2693], "anchor", E0_6),
        emoji(&[0x26F5], "sailboat", E0_6),
        emoji(&[0x1F6F6], "canoe", E3_0),
        emoji(&[0x1F6A4], "speedboat", E0_6),
        emoji(&[0x1F6F3, 0xFE0F], "passenger ship", E0_7),
        emoji(&[0x26F4, 0xFE0F], "ferry", E0_7),
        emoji(&[0x1F6E5, 0xFE0F], "motor boat", E0_7),
        emoji(&[0x1F6A2], "ship", E0_6),
        emoji(&[0x2708, 0xFE0F], "airplane", E0_6),
        emoji(&[0x1F6E9, 0xFE0F], "small airplane", E0_7),
        emoji(&[0x1F6EB], "airplane departure", E1_0),
        emoji(&[0x1F6EC], "airplane arrival", E1_0),
        emoji(&[0x1F4BA], "seat", E0_6),
        emoji(&[0x1F681], "helicopter", E1_0),
        emoji(&[0x1F69F], "suspension railway", E1_0),
        emoji(&[0x1F6A0], "mountain cableway", E1_0),
        emoji(&[0x1F6A1], "aerial tramway", E1_0),
        emoji(&[0x1F6F0, 0xFE0F], "satellite", E0_7),
        emoji(&[0x1F680], "rocket", E0_6),
        emoji(&[0x1F6F8], "flying saucer", E5_0),
        emoji(&[0x1F6CE, 0xFE0F], "bellhop bell", E0_7),
        emoji(&[0x231B], "hourglass done", E0_6),
        emoji(&[0x23F3], "hourglass not done", E0_6),
        emoji(&[0x231A], "watch", E0_6),
        emoji(&[0x23F0], "alarm clock", E0_6),
        emoji(&[0x23F1, 0xFE0F], "stopwatch", E1_0),
        emoji(&[0x23F2, 0xFE0F], "timer clock", E1_0),
        emoji(&[0x1F570, 0xFE0F], "mantelpiece clock", E0_7),
        emoji(&[0x1F55B], "twelve o’clock", E0_6),
        emoji(&[0x1F567], "twelve-thirty", E0_7),
        emoji(&[0x1F550], "one o’clock", E0_6),
        emoji(&[0x1F55C], "one-thirty", E0_7),
        emoji(&[0x1F551], "two o’clock", E0_6),
        emoji(&[0x1F55D], "two-thirty", E0_7),
        emoji(&[0x1F552], "three o’clock", E0_6),
        emoji(&[0x1F55E], "three-thirty", E0_7),
        emoji(&[0x1F553], "four o’clock", E0_6),
        emoji(&[0x1F55F], "four-thirty", E0_7),
        emoji(&[0x1F554], "five o’clock", E0_6),
        emoji(&[0x1F560], "five-thirty", E0_7),
        emoji(&[0x1F555], "six o’clock", E0_6),
        emoji(&[0x1F561], "six-thirty", E0_7),
        emoji(&[0x1F556], "seven o’clock", E0_6),
        emoji(&[0x1F562], "seven-thirty", E0_7),
        emoji(&[0x1F557], "eight o’clock", E0_6),
        emoji(&[0x1F563], "eight-thirty", E0_7),
        emoji(&[0x1F558], "nine o’clock", E0_6),
        emoji(&[0x1F564], "nine-thirty", E0_7),
        emoji(&[0x1F559], "ten o’clock", E0_6),
        emoji(&[0x1F565], "ten-thirty", E0_7),
        emoji(&[0x1F55A], "eleven o’clock", E0_6),
        emoji(&[0x1F566], "eleven-thirty", E0_7),
        emoji(&[0x1F311], "new moon", E0_6),
        emoji(&[0x1F312], "waxing crescent moon", E1_0),
        emoji(&[0x1F313], "first quarter moon", E0_6),
        emoji(&[0x1F314], "waxing gibbous moon", E0_6),
        emoji(&[0x1F315], "full moon", E0_6),
        emoji(&[0x1F316], "waning gibbous moon", E1_0),
        emoji(&[0x1F317], "last quarter moon", E1_0),
        emoji(&[0x1F318], "waning crescent moon", E1_0),
        emoji(&[0x1F319], "crescent moon", E0_6),
        emoji(&[0x1F31A], "new moon face", E1_0),
        emoji(&[0x1F31B], "first quarter moon face", E0_6),
        emoji(&[0x1F31C], "last quarter moon face", E0_7),
        emoji(&[0x1F321, 0xFE0F], "thermometer", E0_7),
        emoji(&[0x2600, 0xFE0F], "sun", E0_6),
        emoji(&[0x1F31D], "full moon face", E1_0),
        emoji(&[0x1F31E], "sun with face", E1_0),
        emoji(&[0x2B50], "star", E0_6),
        emoji(&[0x1F31F], "glowing star", E0_6),
        emoji(&[0x1F320], "shooting star", E0_6),
        emoji(&[0x1F30C], "milky way", E0_6),
        emoji(&[0x2601, 0xFE0F], "cloud", E0_6),
        emoji(&[0x26C5], "sun behind cloud", E0_6),
        emoji(&[0x26C8, 0xFE0F], "cloud with lightning and rain", E0_7),
        emoji(&[0x1F324, 0xFE0F], "sun behind small cloud", E0_7),
        emoji(&[0x1F325, 0xFE0F], "sun behind large cloud", E0_7),
        emoji(&[0x1F326, 0xFE0F], "sun behind rain cloud", E0_7),
        emoji(&[0x1F327, 0xFE0F], "cloud with rain", E0_7),
        emoji(&[0x1F328, 0xFE0F], "cloud with snow", E0_7),
        emoji(&[0x1F329, 0xFE0F], "cloud with lightning", E0_7),
        emoji(&[0x1F32A, 0xFE0F], "tornado", E0_7),
        emoji(&[0x1F32B, 0xFE0F], "fog", E0_7),
        emoji(&[0x1F32C, 0xFE0F], "wind face", E0_7),
        emoji(&[0x1F300], "cyclone", E0_6),
        emoji(&[0x1F308], "rainbow", E0_6),
        emoji(&[0x1F302], "closed umbrella", E0_6),
        emoji(&[0x2602, 0xFE0F], "umbrella", E0_7),
        emoji(&[0x2614], "umbrella with rain drops", E0_6),
        emoji(&[0x26F1, 0xFE0F], "umbrella on ground", E0_7),
        emoji(&[0x26A1], "high voltage", E0_6),
        emoji(&[0x2744, 0xFE0F], "snowflake", E0_6),
        emoji(&[0x2603, 0xFE0F], "snowman", E0_7),
        emoji(&[0x26C4], "snowman without snow", E0_6),
        emoji(&[0x2604, 0xFE0F], "comet", E1_0),
        emoji(&[0x1F525], "fire", E0_6),
        emoji(&[0x1F4A7], "droplet", E0_6),
        emoji(&[0x1F30A], "water wave", E0_6),
    ]),
    (Objects, &[
        emoji(&[0x1F453], "glasses", E0_6),
        emoji(&[0x1F576, 0xFE0F], "sunglasses", E0_7),
        emoji(&[0x1F454], "necktie", E0_6),
        emoji(&[0x1F455], "t-shirt", E0_6),
        emoji(&[0x1F456], "jeans", E0_6),
        emoji(&[0x1F9E3], "scarf", E5_0),
        emoji(&[0x1F9E4], "gloves", E5_0),
        emoji(&[0x1F9E5], "coat", E5_0),
        emoji(&[0x1F9E6], "socks", E5_0),
        emoji(&[0x1F457], "dress", E0_6),
        emoji(&[0x1F458], "kimono", E0_6),
        emoji(&[0x1F459], "bikini", E0_6),
        emoji(&[0x1F45A], "woman’s clothes", E0_6),
        emoji(&[0x1F45B], "purse", E0_6),
        emoji(&[0x1F45C], "handbag", E0_6),
        emoji(&[0x1F45D], "clutch bag", E0_6),
        emoji(&[0x1F6CD, 0xFE0F], "shopping bags", E0_7),
        emoji(&[0x1F392], "backpack", E0_6),
        emoji(&[0x1F45E], "man’s shoe", E0_6),
        emoji(&[0x1F45F], "running shoe", E0_6),
        emoji(&[0x1F460], "high-heeled shoe", E0_6),
        emoji(&[0x1F461], "woman’s sandal", E0_6),
        emoji(&[0x1F462], "woman’s boot", E0_6),
        emoji(&[0x1F451], "crown", E0_6),
        emoji(&[0x1F452], "woman’s hat", E0_6),
        emoji(&[0x1F3A9], "top hat", E0_6),
        emoji(&[0x1F393], "graduation cap", E0_6),
        emoji(&[0x1F9E2], "billed cap", E5_0),
        emoji(&[0x26D1, 0xFE0F], "rescue worker’s helmet", E0_7),
        emoji(&[0x1F4FF], "prayer beads", E1_0),
        emoji(&[0x1F484], "lipstick", E0_6),
        emoji(&[0x1F48D], "ring", E0_6),
        emoji(&[0x1F48E], "gem stone", E0_6),
        emoji(&[0x1F507], "muted speaker", E1_0),
        emoji(&[0x1F508], "speaker low volume", E0_7),
        emoji(&[0x1F509], "speaker medium volume", E1_0),
        emoji(&[0x1F50A], "speaker high volume", E0_6),
        emoji(&[0x1F4E2], "loudspeaker", E0_6),
        emoji(&[0x1F4E3], "megaphone", E0_6),
        emoji(&[0x1F4EF], "postal horn", E1_0),
        emoji(&[0x1F514], "bell", E0_6),
        emoji(&[0x1F515], "bell with slash", E1_0),
        emoji(&[0x1F3BC], "musical score", E0_6),
        emoji(&[0x1F3B5], "musical note", E0_6),
        emoji(&[0x1F3B6], "musical notes", E0_6),
        emoji(&[0x1F399, 0xFE0F], "studio microphone", E0_7),
        emoji(&[0x1F39A, 0xFE0F], "level slider", E0_7),
        emoji(&[0x1F39B, 0xFE0F], "control knobs", E0_7),
        emoji(&[0x1F3A4], "microphone", E0_6),
        emoji(&[0x1F3A7], "headphone", E0_6),
        emoji(&[0x1F4FB], "radio", E0_6),
        emoji(&[0x1F3B7], "saxophone", E0_6),
        emoji(&[0x1F3BA], "trumpet", E0_6),
        emoji(&[0x1F3B8], "guitar", E0_6),
        emoji(&[0x1F3B9], "musical keyboard", E0_6),
        emoji(&[0x1F3BB], "violin", E0_6),
        emoji(&[0x1F941], "drum", E3_0),
        emoji(&[0x1F4F1], "mobile phone", E0_6),
        emoji(&[0x1F4F2], "mobile phone with arrow", E0_6),
        emoji(&[0x260E, 0xFE0F], "telephone", E0_6),
        emoji(&[0x1F4DE], "telephone receiver", E0_6),
        emoji(&[0x1F4DF], "pager", E0_6),
        emoji(&[0x1F4E0], "fax machine", E0_6),
        emoji(&[0x1F50B], "battery", E0_6),
        emoji(&[0x1F50C], "electric plug", E0_6),
        emoji(&[0x1F4BB], "laptop", E0_6),
        emoji(&[0x1F5A5, 0xFE0F], "desktop computer", E0_7),
        emoji(&[0x1F5A8, 0xFE0F], "printer", E0_7),
        emoji(&[0x2328, 0xFE0F], "keyboard", E1_0),
        emoji(&[0x1F5B1, 0xFE0F], "computer mouse", E0_7),
        emoji(&[0x1F5B2, 0xFE0F], "trackball", E0_7),
        emoji(&[0x1F4BD], "computer disk", E0_6),
        emoji(&[0x1F4BE], "floppy disk", E0_6),
        emoji(&[0x1F4BF], "optical disk", E0_6),
        emoji(&[0x1F4C0], "dvd", E0_6),
        emoji(&[0x1F3A5], "movie camera", E0_6),
        emoji(&[0x1F39E, 0xFE0F], "film frames", E0_7),
        emoji(&[0x1F4FD, 0xFE0F], "film projector", E0_7),
        emoji(&[0x1F3AC], "clapper board", E0_6),
        emoji(&[0x1F4FA], "television", E0_6),
        emoji(&[0x1F4F7], "camera", E0_6),
        emoji(&[0x1F4F8], "camera with flash", E1_0),
        emoji(&[0x1F4F9], "video camera", E0_6),
        emoji(&[0x1F4FC], "videocassette", E0_6),
        emoji(&[0x1F50D], "magnifying glass tilted left", E0_6),
        emoji(&[0x1F50E], "magnifying glass tilted right", E0_6),
        emoji(&[0x1F56F, 0xFE0F], "candle", E0_7),
        emoji(&[0x1F4A1], "light bulb", E0_6),
        emoji(&[0x1F526], "flashlight", E0_6),
        emoji(&[0x1F3EE], "red paper lantern", E0_6),
        emoji(&[0x1F4D4], "notebook with decorative cover", E0_6),
        emoji(&[0x1F4D5], "closed book", E0_6),
        emoji(&[0x1F4D6], "open book", E0_6),
        emoji(&[0x1F4D7], "green book", E0_6),
        emoji(&[0x1F4D8], "blue book", E0_6),
        emoji(&[0x1F4D9], "orange book", E0_6),
        emoji(&[0x1F4DA], "books", E0_6),
        emoji(&[0x1F4D3], "notebook", E0_6),
        emoji(&[0x1F4D2], "ledger", E0_6),
        emoji(&[0x1F4C3], "page with curl", E0_6),
        emoji(&[0x1F4DC], "scroll", E0_6),
        emoji(&[0x1F4C4], "page facing up", E0_6),
        emoji(&[0x1F4F0], "newspaper", E0_6),
        emoji(&[0x1F5DE, 0xFE0F], "rolled-up newspaper", E0_7),
        emoji(&[0x1F4D1], "bookmark tabs", E0_6),
        emoji(&[0x1F516], "bookmark", E0_6),
        emoji(&[0x1F3F7, 0xFE0F], "label", E0_7),
        emoji(&[0x1F4B0], "money bag", E0_6),
        emoji(&[0x1F4B4], "yen banknote", E0_6),
        emoji(&[0x1F4B5], "dollar banknote", E0_6),
        emoji(&[0x1F4B6], "euro banknote", E1_0),
        emoji(&[0x1F4B7], "pound banknote", E1_0),
        emoji(&[0x1F4B8], "money with wings", E0_6),
        emoji(&[0x1F4B3], "credit card", E0_6),
        emoji(&[0x1F4B9], "chart increasing with yen", E0_6),
        emoji(&[0x2709, 0xFE0F], "envelope", E0_6),
        emoji(&[0x1F4E7], "e-mail", E0_6),
        emoji(&[0x1F4E8], "incoming envelope", E0_6),
        emoji(&[0x1F4E9], "envelope with arrow", E0_6),
        emoji(&[0x1F4E4], "outbox tray", E0_6),
        emoji(&[0x1F4E5], "inbox tray", E0_6),
        emoji(&[0x1F4E6], "package", E0_6),
        emoji(&[0x1F4EB], "closed mailbox with raised flag", E0_6),
        emoji(&[0x1F4EA], "closed mailbox with lowered flag", E0_6),
        emoji(&[0x1F4EC], "open mailbox with raised flag", E0_7),
        emoji(&[0x1F4ED], "open mailbox with lowered flag", E0_7),
        emoji(&[0x1F4EE], "postbox", E0_6),
        emoji(&[0x1F5F3, 0xFE0F], "ballot box with ballot", E0_7),
        emoji(&[0x270F, 0xFE0F], "pencil", E0_6),
        emoji(&[0x2712, 0xFE0F], "black nib", E0_6),
        emoji(&[0x1F58B, 0xFE0F], "fountain pen", E0_7),
        emoji(&[0x1F58A, 0xFE0F], "pen", E0_7),
        emoji(&[0x1F58C, 0xFE0F], "paintbrush", E0_7),
        emoji(&[0x1F58D, 0xFE0F], "crayon", E0_7),
        emoji(&[0x1F4DD], "memo", E0_6),
        emoji(&[0x1F4BC], "briefcase", E0_6),
        emoji(&[0x1F4C1], "file folder", E0_6),
        emoji(&[0x1F4C2], "open file folder", E0_6),
        emoji(&[0x1F5C2, 0xFE0F], "card index dividers", E0_7),
        emoji(&[0x1F4C5], "calendar", E0_6),
        emoji(&[0x1F4C6], "tear-off calendar", E0_6),
        emoji(&[0x1F5D2, 0xFE0F], "spiral notepad", E0_7),
        emoji(&[0x1F5D3, 0xFE0F], "spiral calendar", E0_7),
        emoji(&[0x1F4C7], "card index", E0_6),
        emoji(&[0x1F4C8], "chart increasing", E0_6),
        emoji(&[0x1F4C9], "chart decreasing", E0_6),
        emoji(&[0x1F4CA], "bar chart", E0_6),
        emoji(&[0x1F4CB], "clipboard", E0_6),
        emoji(&[0x1F4CC], "pushpin", E0_6),
        emoji(&[0x1F4CD], "round pushpin", E0_6),
        emoji(&[0x1F4CE], "paperclip", E0_6),
        emoji(&[0x1F587, 0xFE0F], "linked paperclips", E0_7),
        emoji(&[0x1F4CF], "straight ruler", E0_6),
        emoji(&[0x1F4D0], "triangular ruler", E0_6),
        emoji(&[0x2702, 0xFE0F], "scissors", E0_6),
        emoji(&[0x1F5C3, 0xFE0F], "card file box", E0_7),
        emoji(&[0x1F5C4, 0xFE0F], "file cabinet", E0_7),
        emoji(&[0x1F5D1, 0xFE0F], "wastebasket", E0_7),
        emoji(&[0x1F512], "locked", E0_6),
        emoji(&[0x1F513], "unlocked", E0_6),
        emoji(&[0x1F50F], "locked with pen", E0_6),
        emoji(&[0x1F510], "locked with key", E0_6),
        emoji(&[0x1F511], "key", E0_6),
        emoji(&[0x1F5DD, 0xFE0F], "old key", E0_7),
        emoji(&[0x1F528], "hammer", E0_6),
        emoji(&[0x26CF, 0xFE0F], "pick", E0_7),
        emoji(&[0x2692, 0xFE0F], "hammer and pick", E1_0),
        emoji(&[0x1F6E0, 0xFE0F], "hammer and wrench", E0_7),
        emoji(&[0x1F5E1, 0xFE0F], "dagger", E0_7),
        emoji(&[0x2694, 0xFE0F], "crossed swords", E1_0),
        emoji(&[0x1F4A3], "bomb", E0_6),
        emoji(&[0x1F3F9], "bow and arrow", E1_0),
        emoji(&[0x1F6E1, 0xFE0F], "shield", E0_7),
        emoji(&[0x1F527], "wrench", E0_6),
        emoji(&[0x1F529], "nut and bolt", E0_6),
        emoji(&[0x2699, 0xFE0F], "gear", E1_0),
        emoji(&[0x1F5DC, 0xFE0F], "clamp", E0_7),
        emoji(&[0x2696, 0xFE0F], "balance scale", E1_0),
        emoji(&[0x1F517], "link", E0_6),
        emoji(&[0x26D3, 0xFE0F], "chains", E0_7),
        emoji(&[0x2697, 0xFE0F], "alembic", E1_0),
        emoji(&[0x1F52C], "microscope", E1_0),
        emoji(&[0x1F52D], "telescope", E1_0),
        emoji(&[0x1F4E1], "satellite antenna", E0_6),
        emoji(&[0x1F489], "syringe", E0_6),
        emoji(&[0x1F48A], "pill", E0_6),
        emoji(&[0x1F6AA], "door", E0_6),
        emoji(&[0x1F6CF, 0xFE0F], "bed", E0_7),
        emoji(&[0x1F6CB, 0xFE0F], "couch and lamp", E0_7),
        emoji(&[0x1F6BD], "toilet", E0_6),
        emoji(&[0x1F6BF], "shower", E1_0),
        emoji(&[0x1F6C1], "bathtub", E1_0),
        emoji(&[0x1F6D2], "shopping cart", E3_0),
        emoji(&[0x1F6AC], "cigarette", E0_6),
        emoji(&[0x26B0, 0xFE0F], "coffin", E1_0),
        emoji(&[0x26B1, 0xFE0F], "funeral urn", E1_0),
        emoji(&[0x1F5FF], "moai", E0_6),
    ]),
    (Symbols, &[
        emoji(&[0x1F3E7], "ATM sign", E0_6),
        emoji(&[0x1F6AE], "litter in bin sign", E1_0),
        emoji(&[0x1F6B0], "potable water", E1_0),
        emoji(&[0x267F], "wheelchair symbol", E0_6),
        emoji(&[0x1F6B9], "men’s room", E0_6),
        emoji(&[0x1F6BA], "women’s room", E0_6),
        emoji(&[0x1F6BB], "restroom", E0_6),
        emoji(&[0x1F6BC], "baby symbol", E0_6),
        emoji(&[0x1F6BE], "water closet", E0_6),
        emoji(&[0x1F6C2], "passport control", E1_0),
        emoji(&[0x1F6C3], "customs", E1_0),
        emoji(&[0x1F6C4], "baggage claim", E1_0),
        emoji(&[0x1F6C5], "left luggage", E1_0),
        emoji(&[0x26A0, 0xFE0F], "warning", E0_6),
        emoji(&[0x1F6B8], "children crossing", E1_0),
        emoji(&[0x26D4], "no entry", E0_6),
        emoji(&[0x1F6AB], "prohibited", E0_6),
        emoji(&[0x1F6B3], "no bicycles", E1_0),
        emoji(&[0x1F6AD], "no smoking", E0_6),
        emoji(&[0x1F6AF], "no littering", E1_0),
        emoji(&[0x1F6B1], "non-potable water", E1_0),
        emoji(&[0x1F6B7], "no pedestrians", E1_0),
        emoji(&[0x1F4F5], "no mobile phones", E1_0),
        emoji(&[0x1F51E], "no one under eighteen", E0_6),
        emoji(&[0x2622, 0xFE0F], "radioactive", E1_0),
        emoji(&[0x2623, 0xFE0F], "biohazard", E1_0),
        emoji(&[0x2B06, 0xFE0F], "up arrow", E0_6),
        emoji(&[0x2197, 0xFE0F], "up-right arrow", E0_6),
        emoji(&[0x27A1, 0xFE0F], "right arrow", E0_6),
        emoji(&[0x2198, 0xFE0F], "down-right arrow", E0_6),
        emoji(&[0x2B07, 0xFE0F], "down arrow", E0_6),
        emoji(&[0x2199, 0xFE0F], "down-left arrow", E0_6),
        emoji(&[0x2B05, 0xFE0F], "left arrow", E0_6),
        emoji(&[0x2196, 0xFE0F], "up-left arrow", E0_6),
        emoji(&[0x2195, 0xFE0F], "up-down arrow", E0_6),
        emoji(&[0x2194, 0xFE0F], "left-right arrow", E0_6),
        emoji(&[0x21A9, 0xFE0F], "right arrow curving left", E0_6),
        emoji(&[0x21AA, 0xFE0F], "left arrow curving right", E0_6),
        emoji(&[0x2934, 0xFE0F], "right arrow curving up", E0_6),
        emoji(&[0x2935, 0xFE0F], "right arrow curving down", E0_6),
        emoji(&[0x1F503], "clockwise vertical arrows", E0_6),
        emoji(&[0x1F504], "counterclockwise arrows button", E1_0),
        emoji(&[0x1F519], "BACK arrow", E0_6),
        emoji(&[0x1F51A], "END arrow", E0_6),
        emoji(&[0x1F51B], "ON! arrow", E0_6),
        emoji(&[0x1F51C], "SOON arrow", E0_6),
        emoji(&[0x1F51D], "TOP arrow", E0_6),
        emoji(&[0x1F6D0], "place of worship", E1_0),
        emoji(&[0x269B, 0xFE0F], "atom symbol", E1_0),
        emoji(&[0x1F549, 0xFE0F], "om", E0_7),
        emoji(&[0x2721, 0xFE0F], "star of David", E0_7),
        emoji(&[0x2638, 0xFE0F], "wheel of dharma", E0_7),
        emoji(&[0x262F, 0xFE0F], "yin yang", E0_7),
        emoji(&[0x271D, 0xFE0F], "latin cross", E0_7),
        emoji(&[0x2626, 0xFE0F], "orthodox cross", E1_0),
        emoji(&[0x262A, 0xFE0F], "star and crescent", E0_7),
        emoji(&[0x262E, 0xFE0F], "peace symbol", E1_0),
        emoji(&[0x1F54E], "menorah", E1_0),
        emoji(&[0x1F52F], "dotted six-pointed star", E0_6),
        emoji(&[0x2648], "Aries", E0_6),
        emoji(&[0x2649], "Taurus", E0_6),
        emoji(&[0x264A], "Gemini", E0_6),
        emoji(&[0x264B], "Cancer", E0_6),
        emoji(&[0x264C], "Leo", E0_6),
        emoji(&[0x264D], "Virgo", E0_6),
        emoji(&[0x264E], "Libra", E0_6),
        emoji(&[0x264F], "Scorpio", E0_6),
        emoji(&[0x2650], "Sagittarius", E0_6),
        emoji(&[0x2651], "Capricorn", E0_6),
        emoji(&[0x2652], "Aquarius", E0_6),
        emoji(&[0x2653], "Pisces", E0_6),
        emoji(&[0x26CE], "Ophiuchus", E0_6),
        emoji(&[0x1F500], "shuffle tracks button", E1_0),
        emoji(&[0x1F501], "repeat button", E1_0),
        emoji(&[0x1F502], "repeat single button", E1_0),
        emoji(&[0x25B6, 0xFE0F], "play button", E0_6),
        emoji(&[0x23E9], "fast-forward button", E0_6),
        emoji(&[0x23ED, 0xFE0F], "next track button", E0_7),
        emoji(&[0x23EF, 0xFE0F], "play or pause button", E1_0),
        emoji(&[0x25C0, 0xFE0F], "reverse button", E0_6),
        emoji(&[0x23EA], "fast reverse button", E0_6),
        emoji(&[0x23EE, 0xFE0F], "last track button", E0_7),
        emoji(&[0x1F53C], "upwards button", E0_6),
        emoji(&[0x23EB], "fast up button", E0_6),
        emoji(&[0x1F53D], "downwards button", E0_6),
        emoji(&[0x23EC], "fast down button", E0_6),
        emoji(&[0x23F8, 0xFE0F], "pause button", E0_7),
        emoji(&[0x23F9, 0xFE0F], "stop button", E0_7),
        emoji(&[0x23FA, 0xFE0F], "record button", E0_7),
        emoji(&[0x23CF, 0xFE0F], "eject button", E1_0),
        emoji(&[0x1F3A6], "cinema", E0_6),
        emoji(&[0x1F505], "dim button", E1_0),
        emoji(&[0x1F506], "bright button", E1_0),
        emoji(&[0x1F4F6], "antenna bars", E0_6),
        emoji(&[0x1F4F3], "vibration mode", E0_6),
        emoji(&[0x1F4F4], "mobile phone off", E0_6),
        emoji(&[0x2640, 0xFE0F], "female sign", E4_0),
        emoji(&[0x2642, 0xFE0F], "male sign", E4_0),
        emoji(&[0x2716, 0xFE0F], "multiply", E0_6),
        emoji(&[0x2795], "plus", E0_6),
        emoji(&[0x2796], "minus", E0_6),
        emoji(&[0x2797], "divide", E0_6),
        emoji(&[0x203C, 0xFE0F], "double exclamation mark", E0_6),
        emoji(&[0x2049, 0xFE0F], "exclamation question mark", E0_6),
        emoji(&[0x2753], "red question mark", E0_6),
        emoji(&[0x2754], "white question mark", E0_6),
        emoji(&[0x2755], "white exclamation mark", E0_6),
        emoji(&[0x2757], "red exclamation mark", E0_6),
        emoji(&[0x3030, 0xFE0F], "wavy dash", E0_6),
        emoji(&[0x1F4B1], "currency exchange", E0_6),
        emoji(&[0x1F4B2], "heavy dollar sign", E0_6),
        emoji(&[0x2695, 0xFE0F], "medical symbol", E4_0),
        emoji(&[0x267B, 0xFE0F], "recycling symbol", E0_6),
        emoji(&[0x269C, 0xFE0F], "fleur-de-lis", E1_0),
        emoji(&[0x1F531], "trident emblem", E0_6),
        emoji(&[0x1F4DB], "name badge", E0_6),
        emoji(&[0x1F530], "Japanese symbol for beginner", E0_6),
        emoji(&[0x2B55], "hollow red circle", E0_6),
        emoji(&[0x2705], "check mark button", E0_6),
        emoji(&[0x2611, 0xFE0F], "check box with check", E0_6),
        emoji(&[0x2714, 0xFE0F], "check mark", E0_6),
        emoji(&[0x274C], "cross mark", E0_6),
        emoji(&[0x274E], "cross mark button", E0_6),
        emoji(&[0x27B0], "curly loop", E0_6),
        emoji(&[0x27BF], "double curly loop", E1_0),
        emoji(&[0x303D, 0xFE0F], "part alternation mark", E0_6),
        emoji(&[0x2733, 0xFE0F], "eight-spoked asterisk", E0_6),
        emoji(&[0x2734, 0xFE0F], "eight-pointed star", E0_6),
        emoji(&[0x2747, 0xFE0F], "sparkle", E0_6),
        emoji(&[0xA9, 0xFE0F], "copyright", E0_6),
        emoji(&[0xAE, 0xFE0F], "registered", E0_6),
        emoji(&[0x2122, 0xFE0F], "trade mark", E0_6),
        emoji(&[0x23, 0xFE0F, 0x20E3], "keycap: #", E0_6),
        emoji(&[0x2A, 0xFE0F, 0x20E3], "keycap: *", E2_0),
        emoji(&[0x30, 0xFE0F, 0x20E3], "keycap: 0", E0_6),
        emoji(&[0x31, 0xFE0F, 0x20E3], "keycap: 1", E0_6),
        emoji(&[0x32, 0xFE0F, 0x20E3], "keycap: 2", E0_6),
        emoji(&[0x33, 0xFE0F, 0x20E3], "keycap: 3", E0_6),
        emoji(&[0x34, 0xFE0F, 0x20E3], "keycap: 4", E0_6),
        emoji(&[0x35, 0xFE0F, 0x20E3], "keycap: 5", E0_6),
        emoji(&[0x36, 0xFE0F, 0x20E3], "keycap: 6", E0_6),
        emoji(&[0x37, 0xFE0F, 0x20E3], "keycap: 7", E0_6),
        emoji(&[0x38, 0xFE0F, 0x20E3], "keycap: 8", E0_6),
        emoji(&[0x39, 0xFE0F, 0x20E3], "keycap: 9", E0_6),
        emoji(&[0x1F51F], "keycap: 10", E0_6),
        emoji(&[0x1F520], "input latin uppercase", E0_6),
        emoji(&[0x1F521], "input latin lowercase", E0_6),
        emoji(&[0x1F522], "input numbers", E0_6),
        emoji(&[0x1F523], "input symbols", E0_6),
        emoji(&[0x1F524], "input latin letters", E0_6),
        emoji(&[0x1F170, 0xFE0F], "A button (blood type)", E0_6),
        emoji(&[0x1F18E], "AB button (blood type)", E0_6),
        emoji(&[0x1F171, 0xFE0F], "B button (blood type)", E0_6),
        emoji(&[0x1F191], "CL button", E0_6),
        emoji(&[0x1F192], "COOL button", E0_6),
        emoji(&[0x1F193], "FREE button", E0_6),
        emoji(&[0x2139, 0xFE0F], "information", E0_6),
        emoji(&[0x1F194], "ID button", E0_6),
        emoji(&[0x24C2, 0xFE0F], "circled M", E0_6),
        emoji(&[0x1F195], "NEW button", E0_6),
        emoji(&[0x1F196], "NG button", E0_6),
        emoji(&[0x1F17E, 0xFE0F], "O button (blood type)", E0_6),
        emoji(&[0x1F197], "OK button", E0_6),
        emoji(&[0x1F17F, 0xFE0F], "P button", E0_6),
        emoji(&[0x1F198], "SOS button", E0_6),
        emoji(&[0x1F199], "UP! button", E0_6),
        emoji(&[0x1F19A], "VS button", E0_6),
        emoji(&[0x1F201], "Japanese “here” button", E0_6),
        emoji(&[0x1F202, 0xFE0F], "Japanese “service charge” button", E0_6),
        emoji(&[0x1F237, 0xFE0F], "Japanese “monthly amount” button", E0_6),
        emoji(&[0x1F236], "Japanese “not free of charge” button", E0_6),
        emoji(&[0x1F22F], "Japanese “reserved” button", E0_6),
        emoji(&[0x1F250], "Japanese “bargain” button", E0_6),
        emoji(&[0x1F239], "Japanese “discount” button", E0_6),
        emoji(&[0x1F21A], "Japanese “free of charge” button", E0_6),
        emoji(&[0x1F232], "Japanese “prohibited” button", E0_6),
        emoji(&[0x1F251], "Japanese “acceptable” button", E0_6),
        emoji(&[0x1F238], "Japanese “application” button", E0_6),
        emoji(&[0x1F234], "Japanese “passing grade” button", E0_6),
        emoji(&[0x1F233], "Japanese “vacancy” button", E0_6),
        emoji(&[0x3297, 0xFE0F], "Japanese “congratulations” button", E0_6),
        emoji(&[0x3299, 0xFE0F], "Japanese “secret” button", E0_6),
        emoji(&[0x1F23A], "Japanese “open for business” button", E0_6),
        emoji(&[0x1F235], "Japanese “no vacancy” button", E0_6),
        emoji(&[0x1F534], "red circle", E0_6),
        emoji(&[0x1F535], "blue circle", E0_6),
        emoji(&[0x26AB], "black circle", E0_6),
        emoji(&[0x26AA], "white circle", E0_6),
        emoji(&[0x2B1B], "black large square", E0_6),
        emoji(&[0x2B1C], "white large square", E0_6),
        emoji(&[0x25FC, 0xFE0F], "black medium square", E0_6),
        emoji(&[0x25FB, 0xFE0F], "white medium square", E0_6),
        emoji(&[0x25FE], "black medium-small square", E0_6),
        emoji(&[0x25FD], "white medium-small square", E0_6),
        emoji(&[0x25AA, 0xFE0F], "black small square", E0_6),
        emoji(&[0x25AB, 0xFE0F], "white small square", E0_6),
        emoji(&[0x1F536], "large orange diamond", E0_6),
        emoji(&[0x1F537], "large blue diamond", E0_6),
        emoji(&[0x1F538], "small orange diamond", E0_6),
        emoji(&[0x1F539], "small blue diamond", E0_6),
        emoji(&[0x1F53A], "red triangle pointed up", E0_6),
        emoji(&[0x1F53B], "red triangle pointed down", E0_6),
        emoji(&[0x1F4A0], "diamond with a dot", E0_6),
        emoji(&[0x1F518], "radio button", E0_6),
        emoji(&[0x1F533], "white square button", E0_6),
        emoji(&[0x1F532], "black square button", E0_6),
    ]),
    (Flags, &[
        emoji(&[0x1F3C1], "chequered flag", E0_6),
        emoji(&[0x1F6A9], "triangular flag", E0_6),
        emoji(&[0x1F38C], "crossed flags", E0_6),
        emoji(&[0x1F3F4], "black flag", E1_0),
        emoji(&[0x1F3F3, 0xFE0F], "white flag", E0_7),
        emoji(&[0x1F3F3, 0xFE0F, 0x200D, 0x1F308], "rainbow flag", E4_0),
        emoji(&[0x1F1E6, 0x1F1E8], "flag: Ascension Island", E2_0),
        emoji(&[0x1F1E6, 0x1F1E9], "flag: Andorra", E2_0),
        emoji(&[0x1F1E6, 0x1F1EA], "flag: United Arab Emirates", E2_0),
        emoji(&[0x1F1E6, 0x1F1EB], "flag: Afghanistan", E2_0),
        emoji(&[0x1F1E6, 0x1F1EC], "flag: Antigua & Barbuda", E2_0),
        emoji(&[0x1F1E6, 0x1F1EE], "flag: Anguilla", E2_0),
        emoji(&[0x1F1E6, 0x1F1F1], "flag: Albania", E2_0),
        emoji(&[0x1F1E6, 0x1F1F2], "flag: Armenia", E2_0),
        emoji(&[0x1F1E6, 0x1F1F4], "flag: Angola", E2_0),
        emoji(&[0x1F1E6, 0x1F1F6], "flag: Antarctica", E2_0),
        emoji(&[0x1F1E6, 0x1F1F7], "flag: Argentina", E2_0),
        emoji(&[0x1F1E6, 0x1F1F8], "flag: American Samoa", E2_0),
        emoji(&[0x1F1E6, 0x1F1F9], "flag: Austria", E2_0),
        emoji(&[0x1F1E6, 0x1F1FA], "flag: Australia", E2_0),
        emoji(&[0x1F1E6, 0x1F1FC], "flag: Aruba", E2_0),
        emoji(&[0x1F1E6, 0x1F1FD], "flag: Åland Islands", E2_0),
        emoji(&[0x1F1E6, 0x1F1FF], "flag: Azerbaijan", E2_0),
        emoji(&[0x1F1E7, 0x1F1E6], "flag: Bosnia & Herzegovina", E2_0),
        emoji(&[0x1F1E7, 0x1F1E7], "flag: Barbados", E2_0),
        emoji(&[0x1F1E7, 0x1F1E9], "flag: Bangladesh", E2_0),
        emoji(&[0x1F1E7, 0x1F1EA], "flag: Belgium", E2_0),
        emoji(&[0x1F1E7, 0x1F1EB], "flag: Burkina Faso", E2_0),
        emoji(&[0x1F1E7, 0x1F1EC], "flag: Bulgaria", E2_0),
        emoji(&[0x1F1E7, 0x1F1ED], "flag: Bahrain", E2_0),
        emoji(&[0x1F1E7, 0x1F1EE], "flag: Burundi", E2_0),
        emoji(&[0x1F1E7, 0x1F1EF], "flag: Benin", E2_0),
        emoji(&[0x1F1E7, 0x1F1F1], "flag: St. Barthélemy", E2_0),
        emoji(&[0x1F1E7, 0x1F1F2], "flag: Bermuda", E2_0),
        emoji(&[0x1F1E7, 0x1F1F3], "flag: Brunei", E2_0),
        emoji(&[0x1F1E7, 0x1F1F4], "flag: Bolivia", E2_0),
        emoji(&[0x1F1E7, 0x1F1F6], "flag: Caribbean Netherlands", E2_0),
        emoji(&[0x1F1E7, 0x1F1F7], "flag: Brazil", E2_0),
        emoji(&[0x1F1E7, 0x1F1F8], "flag: Bahamas", E2_0),
        emoji(&[0x1F1E7, 0x1F1F9], "flag: Bhutan", E2_0),
        emoji(&[0x1F1E7, 0x1F1FB], "flag: Bouvet Island", E2_0),
        emoji(&[0x1F1E7, 0x1F1FC], "flag: Botswana", E2_0),
        emoji(&[0x1F1E7, 0x1F1FE], "flag: Belarus", E2_0),
        emoji(&[0x1F1E7, 0x1F1FF], "flag: Belize", E2_0),
        emoji(&[0x1F1E8, 0x1F1E6], "flag: Canada", E2_0),
        emoji(&[0x1F1E8, 0x1F1E8], "flag: Cocos (Keeling) Islands", E2_0),
        emoji(&[0x1F1E8, 0x1F1E9], "flag: Congo - Kinshasa", E2_0),
        emoji(&[0x1F1E8, 0x1F1EB], "flag: Central African Republic", E2_0),
        emoji(&[0x1F1E8, 0x1F1EC], "flag: Congo - Brazzaville", E2_0),
        emoji(&[0x1F1E8, 0x1F1ED], "flag: Switzerland", E2_0),
        emoji(&[0x1F1E8, 0x1F1EE], "flag: Côte d’Ivoire", E2_0),
        emoji(&[0x1F1E8, 0x1F1F0], "flag: Cook Islands", E2_0),
        emoji(&[0x1F1E8, 0x1F1F1], "flag: Chile", E2_0),
        emoji(&[0x1F1E8, 0x1F1F2], "flag: Cameroon", E2_0),
        emoji(&[0x1F1E8, 0x1F1F3], "flag: China", E0_6),
        emoji(&[0x1F1E8, 0x1F1F4], "flag: Colombia", E2_0),
        emoji(&[0x1F1E8, 0x1F1F5], "flag: Clipperton Island", E2_0),
        emoji(&[0x1F1E8, 0x1F1F7], "flag: Costa Rica", E2_0),
        emoji(&[0x1F1E8, 0x1F1FA], "flag: Cuba", E2_0),
        emoji(&[0x1F1E8, 0x1F1FB], "flag: Cape Verde", E2_0),
        emoji(&[0x1F1E8, 0x1F1FC], "flag: Curaçao", E2_0),
        emoji(&[0x1F1E8, 0x1F1FD], "flag: Christmas Island", E2_0),
        emoji(&[0x1F1E8, 0x1F1FE], "flag: Cyprus", E2_0),
        emoji(&[0x1F1E8, 0x1F1FF], "flag: Czechia", E2_0),
        emoji(&[0x1F1E9, 0x1F1EA], "flag: Germany", E0_6),
        emoji(&[0x1F1E9, 0x1F1EC], "flag: Diego Garcia", E2_0),
        emoji(&[0x1F1E9, 0x1F1EF], "flag: Djibouti", E2_0),
        emoji(&[0x1F1E9, 0x1F1F0], "flag: Denmark", E2_0),
        emoji(&[0x1F1E9, 0x1F1F2], "flag: Dominica", E2_0),
        emoji(&[0x1F1E9, 0x1F1F4], "flag: Dominican Republic", E2_0),
        emoji(&[0x1F1E9, 0x1F1FF], "flag: Algeria", E2_0),
        emoji(&[0x1F1EA, 0x1F1E6], "flag: Ceuta & Melilla", E2_0),
        emoji(&[0x1F1EA, 0x1F1E8], "flag: Ecuador", E2_0),
        emoji(&[0x1F1EA, 0x1F1EA], "flag: Estonia", E2_0),
        emoji(&[0x1F1EA, 0x1F1EC], "flag: Egypt", E2_0),
        emoji(&[0x1F1EA, 0x1F1ED], "flag: Western Sahara", E2_0),
        emoji(&[0x1F1EA, 0x1F1F7], "flag: Eritrea", E2_0),
        emoji(&[0x1F1EA, 0x1F1F8], "flag: Spain", E0_6),
        emoji(&[0x1F1EA, 0x1F1F9], "flag: Ethiopia", E2_0),
        emoji(&[0x1F1EA, 0x1F1FA], "flag: European Union", E2_0),
        emoji(&[0x1F1EB, 0x1F1EE], "flag: Finland", E2_0),
        emoji(&[0x1F1EB, 0x1F1EF], "flag: Fiji", E2_0),
        emoji(&[0x1F1EB, 0x1F1F0], "flag: Falkland Islands", E2_0),
        emoji(&[0x1F1EB, 0x1F1F2], "flag: Micronesia", E2_0),
        emoji(&[0x1F1EB, 0x1F1F4], "flag: Faroe Islands", E2_0),
        emoji(&[0x1F1EB, 0x1F1F7], "flag: France", E0_6),
        emoji(&[0x1F1EC, 0x1F1E6], "flag: Gabon", E2_0),
        emoji(&[0x1F1EC, 0x1F1E7], "flag: United Kingdom", E0_6),
        emoji(&[0x1F1EC, 0x1F1E9], "flag: Grenada", E2_0),
        emoji(&[0x1F1EC, 0x1F1EA], "flag: Georgia", E2_0),
        emoji(&[0x1F1EC, 0x1F1EB], "flag: French Guiana", E2_0),
        emoji(&[0x1F1EC, 0x1F1EC], "flag: Guernsey", E2_0),
        emoji(&[0x1F1EC, 0x1F1ED], "flag: Ghana", E2_0),
        emoji(&[0x1F1EC, 0x1F1EE], "flag: Gibraltar", E2_0),
        emoji(&[0x1F1EC, 0x1F1F1], "flag: Greenland", E2_0),
        emoji(&[0x1F1EC, 0x1F1F2], "flag: Gambia", E2_0),
        emoji(&[0x1F1EC, 0x1F1F3], "flag: Guinea", E2_0),
        emoji(&[0x1F1EC, 0x1F1F5], "flag: Guadeloupe", E2_0),
        emoji(&[0x1F1EC, 0x1F1F6], "flag: Equatorial Guinea", E2_0),
        emoji(&[0x1F1EC, 0x1F1F7], "flag: Greece", E2_0),
        emoji(&[0x1F1EC, 0x1F1F8], "flag: South Georgia & South Sandwich Islands", E2_0),
        emoji(&[0x1F1EC, 0x1F1F9], "flag: Guatemala", E2_0),
        emoji(&[0x1F1EC, 0x1F1FA], "flag: Guam", E2_0),
        emoji(&[0x1F1EC, 0x1F1FC], "flag: Guinea-Bissau", E2_0),
        emoji(&[0x1F1EC, 0x1F1FE], "flag: Guyana", E2_0),
        emoji(&[0x1F1ED, 0x1F1F0], "flag: Hong Kong SAR China", E2_0),
        emoji(&[0x1F1ED, 0x1F1F2], "flag: Heard & McDonald Islands", E2_0),
        emoji(&[0x1F1ED, 0x1F1F3], "flag: Honduras", E2_0),
        emoji(&[0x1F1ED, 0x1F1F7], "flag: Croatia", E2_0),
        emoji(&[0x1F1ED, 0x1F1F9], "flag: Haiti", E2_0),
        emoji(&[0x1F1ED, 0x1F1FA], "flag: Hungary", E2_0),
        emoji(&[0x1F1EE, 0x1F1E8], "flag: Canary Islands", E2_0),
        emoji(&[0x1F1EE, 0x1F1E9], "flag: Indonesia", E2_0),
        emoji(&[0x1F1EE, 0x1F1EA], "flag: Ireland", E2_0),
        emoji(&[0x1F1EE, 0x1F1F1], "flag: Israel", E2_0),
        emoji(&[0x1F1EE, 0x1F1F2], "flag: Isle of Man", E2_0),
        emoji(&[0x1F1EE, 0x1F1F3], "flag: India", E2_0),
        emoji(&[0x1F1EE, 0x1F1F4], "flag: British Indian Ocean Territory", E2_0),
        emoji(&[0x1F1EE, 0x1F1F6], "flag: Iraq", E2_0),
        emoji(&[0x1F1EE, 0x1F1F7], "flag: Iran", E2_0),
        emoji(&[0x1F1EE, 0x1F1F8], "flag: Iceland", E2_0),
        emoji(&[0x1F1EE, 0x1F1F9], "flag: Italy", E0_6),
        emoji(&[0x1F1EF, 0x1F1EA], "flag: Jersey", E2_0),
        emoji(&[0x1F1EF, 0x1F1F2], "flag: Jamaica", E2_0),
        emoji(&[0x1F1EF, 0x1F1F4], "flag: Jordan", E2_0),
        emoji(&[0x1F1EF, 0x1F1F5], "flag: Japan", E0_6),
        emoji(&[0x1F1F0, 0x1F1EA], "flag: Kenya", E2_0),
        emoji(&[0x1F1F0, 0x1F1EC], "flag: Kyrgyzstan", E2_0),
        emoji(&[0x1F1F0, 0x1F1ED], "flag: Cambodia", E2_0),
        emoji(&[0x1F1F0, 0x1F1EE], "flag: Kiribati", E2_0),
        emoji(&[0x1F1F0, 0x1F1F2], "flag: Comoros", E2_0),
        emoji(&[0x1F1F0, 0x1F1F3], "flag: St. Kitts & Nevis", E2_0),
        emoji(&[0x1F1F0, 0x1F1F5], "flag: North Korea", E2_0),
        emoji(&[0x1F1F0, 0x1F1F7], "flag: South Korea", E0_6),
        emoji(&[0x1F1F0, 0x1F1FC], "flag: Kuwait", E2_0),
        emoji(&[0x1F1F0, 0x1F1FE], "flag: Cayman Islands", E2_0),
        emoji(&[0x1F1F0, 0x1F1FF], "flag: Kazakhstan", E2_0),
        emoji(&[0x1F1F1, 0x1F1E6], "flag: Laos", E2_0),
        emoji(&[0x1F1F1, 0x1F1E7], "flag: Lebanon", E2_0),
        emoji(&[0x1F1F1, 0x1F1E8], "flag: St. Lucia", E2_0),
        emoji(&[0x1F1F1, 0x1F1EE], "flag: Liechtenstein", E2_0),
        emoji(&[0x1F1F1, 0x1F1F0], "flag: Sri Lanka", E2_0),
        emoji(&[0x1F1F1, 0x1F1F7], "flag: Liberia", E2_0),
        emoji(&[0x1F1F1, 0x1F1F8], "flag: Lesotho", E2_0),
        emoji(&[0x1F1F1, 0x1F1F9], "flag: Lithuania", E2_0),
        emoji(&[0x1F1F1, 0x1F1FA], "flag: Luxembourg", E2_0),
        emoji(&[0x1F1F1, 0x1F1FB], "flag: Latvia", E2_0),
        emoji(&[0x1F1F1, 0x1F1FE], "flag: Libya", E2_0),
        emoji(&[0x1F1F2, 0x1F1E6], "flag: Morocco", E2_0),
        emoji(&[0x1F1F2, 0x1F1E8], "flag: Monaco", E2_0),
        emoji(&[0x1F1F2, 0x1F1E9], "flag: Moldova", E2_0),
        emoji(&[0x1F1F2, 0x1F1EA], "flag: Montenegro", E2_0),
        emoji(&[0x1F1F2, 0x1F1EB], "flag: St. Martin", E2_0),
        emoji(&[0x1F1F2, 0x1F1EC], "flag: Madagascar", E2_0),
        emoji(&[0x1F1F2, 0x1F1ED], "flag: Marshall Islands", E2_0),
        emoji(&[0x1F1F2, 0x1F1F0], "flag: North Macedonia", E2_0),
        emoji(&[0x1F1F2, 0x1F1F1], "flag: Mali", E2_0),
        emoji(&[0x1F1F2, 0x1F1F2], "flag: Myanmar (Burma)", E2_0),
        emoji(&[0x1F1F2, 0x1F1F3], "flag: Mongolia", E2_0),
        emoji(&[0x1F1F2, 0x1F1F4], "flag: Macao SAR China", E2_0),
        emoji(&[0x1F1F2, 0x1F1F5], "flag: Northern Mariana Islands", E2_0),
        emoji(&[0x1F1F2, 0x1F1F6], "flag: Martinique", E2_0),
        emoji(&[0x1F1F2, 0x1F1F7], "flag: Mauritania", E2_0),
        emoji(&[0x1F1F2, 0x1F1F8], "flag: Montserrat", E2_0),
        emoji(&[0x1F1F2, 0x1F1F9], "flag: Malta", E2_0),
        emoji(&[0x1F1F2, 0x1F1FA], "flag: Mauritius", E2_0),
        emoji(&[0x1F1F2, 0x1F1FB], "flag: Maldives", E2_0),
        emoji(&[0x1F1F2, 0x1F1FC], "flag: Malawi", E2_0),
        emoji(&[0x1F1F2, 0x1F1FD], "flag: Mexico", E2_0),
        emoji(&[0x1F1F2, 0x1F1FE], "flag: Malaysia", E2_0),
        emoji(&[0x1F1F2, 0x1F1FF], "flag: Mozambique", E2_0),
        emoji(&[0x1F1F3, 0x1F1E6], "flag: Namibia", E2_0),
        emoji(&[0x1F1F3, 0x1F1E8], "flag: New Caledonia", E2_0),
        emoji(&[0x1F1F3, 0x1F1EA], "flag: Niger", E2_0),
        emoji(&[0x1F1F3, 0x1F1EB], "flag: Norfolk Island", E2_0),
        emoji(&[0x1F1F3, 0x1F1EC], "flag: Nigeria", E2_0),
        emoji(&[0x1F1F3, 0x1F1EE], "flag: Nicaragua", E2_0),
        emoji(&[0x1F1F3, 0x1F1F1], "flag: Netherlands", E2_0),
        emoji(&[0x1F1F3, 0x1F1F4], "flag: Norway", E2_0),
        emoji(&[0x1F1F3, 0x1F1F5], "flag: Nepal", E2_0),
        emoji(&[0x1F1F3, 0x1F1F7], "flag: Nauru", E2_0),
        emoji(&[0x1F1F3, 0x1F1FA], "flag: Niue", E2_0),
        emoji(&[0x1F1F3, 0x1F1FF], "flag: New Zealand", E2_0),
        emoji(&[0x1F1F4, 0x1F1F2], "flag: Oman", E2_0),
        emoji(&[0x1F1F5, 0x1F1E6], "flag: Panama", E2_0),
        emoji(&[0x1F1F5, 0x1F1EA], "flag: Peru", E2_0),
        emoji(&[0x1F1F5, 0x1F1EB], "flag: French Polynesia", E2_0),
        emoji(&[0x1F1F5, 0x1F1EC], "flag: Papua New Guinea", E2_0),
        emoji(&[0x1F1F5, 0x1F1ED], "flag: Philippines", E2_0),
        emoji(&[0x1F1F5, 0x1F1F0], "flag: Pakistan", E2_0),
        emoji(&[0x1F1F5, 0x1F1F1], "flag: Poland", E2_0),
        emoji(&[0x1F1F5, 0x1F1F2], "flag: St. Pierre & Miquelon", E2_0),
        emoji(&[0x1F1F5, 0x1F1F3], "flag: Pitcairn Islands", E2_0),
        emoji(&[0x1F1F5, 0x1F1F7], "flag: Puerto Rico", E2_0),
        emoji(&[0x1F1F5, 0x1F1F8], "flag: Palestinian Territories", E2_0),
        emoji(&[0x1F1F5, 0x1F1F9], "flag: Portugal", E2_0),
        emoji(&[0x1F1F5, 0x1F1FC], "flag: Palau", E2_0),
        emoji(&[0x1F1F5, 0x1F1FE], "flag: Paraguay", E2_0),
        emoji(&[0x1F1F6, 0x1F1E6], "flag: Qatar", E2_0),
        emoji(&[0x1F1F7, 0x1F1EA], "flag: Réunion", E2_0),
        emoji(&[0x1F1F7, 0x1F1F4], "flag: Romania", E2_0),
        emoji(&[0x1F1F7, 0x1F1F8], "flag: Serbia", E2_0),
        emoji(&[0x1F1F7, 0x1F1FA], "flag: Russia", E0_6),
        emoji(&[0x1F1F7, 0x1F1FC], "flag: Rwanda", E2_0),
        emoji(&[0x1F1F8, 0x1F1E6], "flag: Saudi Arabia", E2_0),
        emoji(&[0x1F1F8, 0x1F1E7], "flag: Solomon Islands", E2_0),
        emoji(&[0x1F1F8, 0x1F1E8], "flag: Seychelles", E2_0),
        emoji(&[0x1F1F8, 0x1F1E9], "flag: Sudan", E2_0),
        emoji(&[0x1F1F8, 0x1F1EA], "flag: Sweden", E2_0),
        emoji(&[0x1F1F8, 0x1F1EC], "flag: Singapore", E2_0),
        emoji(&[0x1F1F8, 0x1F1ED], "flag: St. Helena", E2_0),
        emoji(&[0x1F1F8, 0x1F1EE], "flag: Slovenia", E2_0),
        emoji(&[0x1F1F8, 0x1F1EF], "flag: Svalbard & Jan Mayen", E2_0),
        emoji(&[0x1F1F8, 0x1F1F0], "flag: Slovakia", E2_0),
        emoji(&[0x1F1F8, 0x1F1F1], "flag: Sierra Leone", E2_0),
        emoji(&[0x1F1F8, 0x1F1F2], "flag: San Marino", E2_0),
        emoji(&[0x1F1F8, 0x1F1F3], "flag: Senegal", E2_0),
        emoji(&[0x1F1F8, 0x1F1F4], "flag: Somalia", E2_0),
        emoji(&[0x1F1F8, 0x1F1F7], "flag: Suriname", E2_0),
        emoji(&[0x1F1F8, 0x1F1F8], "flag: South Sudan", E2_0),
        emoji(&[0x1F1F8, 0x1F1F9], "flag: São Tomé & Príncipe", E2_0),
        emoji(&[0x1F1F8, 0x1F1FB], "flag: El Salvador", E2_0),
        emoji(&[0x1F1F8, 0x1F1FD], "flag: Sint Maarten", E2_0),
        emoji(&[0x1F1F8, 0x1F1FE], "flag: Syria", E2_0),
        emoji(&[0x1F1F8, 0x1F1FF], "flag: Eswatini", E2_0),
        emoji(&[0x1F1F9, 0x1F1E6], "flag: Tristan da Cunha", E2_0),
        emoji(&[0x1F1F9, 0x1F1E8], "flag: Turks & Caicos Islands", E2_0),
        emoji(&[0x1F1F9, 0x1F1E9], "flag: Chad", E2_0),
        emoji(&[0x1F1F9, 0x1F1EB], "flag: French Southern Territories", E2_0),
        emoji(&[0x1F1F9, 0x1F1EC], "flag: Togo", E2_0),
        emoji(&[0x1F1F9, 0x1F1ED], "flag: Thailand", E2_0),
        emoji(&[0x1F1F9, 0x1F1EF], "flag: Tajikistan", E2_0),
        emoji(&[0x1F1F9, 0x1F1F0], "flag: Tokelau", E2_0),
        emoji(&[0x1F1F9, 0x1F1F1], "flag: Timor-Leste", E2_0),
        emoji(&[0x1F1F9, 0x1F1F2], "flag: Turkmenistan", E2_0),
        emoji(&[0x1F1F9, 0x1F1F3], "flag: Tunisia", E2_0),
        emoji(&[0x1F1F9, 0x1F1F4], "flag: Tonga", E2_0),
        emoji(&[0x1F1F9, 0x1F1F7], "flag: Türkiye", E2_0),
        emoji(&[0x1F1F9, 0x1F1F9], "flag: Trinidad & Tobago", E2_0),
        emoji(&[0x1F1F9, 0x1F1FB], "flag: Tuvalu", E2_0),
        emoji(&[0x1F1F9, 0x1F1FC], "flag: Taiwan", E2_0),
        emoji(&[0x1F1F9, 0x1F1FF], "flag: Tanzania", E2_0),
        emoji(&[0x1F1FA, 0x1F1E6], "flag: Ukraine", E2_0),
        emoji(&[0x1F1FA, 0x1F1EC], "flag: Uganda", E2_0),
        emoji(&[0x1F1FA, 0x1F1F2], "flag: U.S. Outlying Islands", E2_0),
        emoji(&[0x1F1FA, 0x1F1F3], "flag: United Nations", E4_0),
        emoji(&[0x1F1FA, 0x1F1F8], "flag: United States", E0_6),
        emoji(&[0x1F1FA, 0x1F1FE], "flag: Uruguay", E2_0),
        emoji(&[0x1F1FA, 0x1F1FF], "flag: Uzbekistan", E2_0),
        emoji(&[0x1F1FB, 0x1F1E6], "flag: Vatican City", E2_0),
        emoji(&[0x1F1FB, 0x1F1E8], "flag: St. Vincent & Grenadines", E2_0),
        emoji(&[0x1F1FB, 0x1F1EA], "flag: Venezuela", E2_0),
        emoji(&[0x1F1FB, 0x1F1EC], "flag: British Virgin Islands", E2_0),
        emoji(&[0x1F1FB, 0x1F1EE], "flag: U.S. Virgin Islands", E2_0),
        emoji(&[0x1F1FB, 0x1F1F3], "flag: Vietnam", E2_0),
        emoji(&[0x1F1FB, 0x1F1FA], "flag: Vanuatu", E2_0),
        emoji(&[0x1F1FC, 0x1F1EB], "flag: Wallis & Futuna", E2_0),
        emoji(&[0x1F1FC, 0x1F1F8], "flag: Samoa", E2_0),
        emoji(&[0x1F1FD, 0x1F1F0], "flag: Kosovo", E2_0),
        emoji(&[0x1F1FE, 0x1F1EA], "flag: Yemen", E2_0),
        emoji(&[0x1F1FE, 0x1F1F9], "flag: Mayotte", E2_0),
        emoji(&[0x1F1FF, 0x1F1E6], "flag: South Africa", E2_0),
        emoji(&[0x1F1FF, 0x1F1F2], "flag: Zambia", E2_0),
        emoji(&[0x1F1FF, 0x1F1FC], "flag: Zimbabwe", E2_0),
        emoji(&[0x1F3F4, 0xE0067, 0xE0062, 0xE0065, 0xE006E, 0xE0067, 0xE007F], "flag: England", E5_0),
        emoji(&[0x1F3F4, 0xE0067, 0xE0062, 0xE0073, 0xE0063, 0xE0074, 0xE007F], "flag: Scotland", E5_0),
        emoji(&[0x1F3F4, 0xE0067, 0xE0062, 0xE0077, 0xE006C, 0xE0073, 0xE007F], "flag: Wales", E5_0),
    ]),
];
