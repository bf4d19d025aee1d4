// Bundled chapter table: (verses, transliterated name, English translated name).
pub(crate) const CHAPTERS: [(u16, &str, &str); 114] = [
    (7, "Al-Fatihah", "The Opener"),
    (286, "Al-Baqarah", "The Cow"),
    (200, "Ali 'Imran", "Family of Imran"),
    (176, "An-Nisa", "The Women"),
    (120, "Al-Ma'idah", "The Table Spread"),
    (165, "Al-An'am", "The Cattle"),
    (206, "Al-A'raf", "The Heights"),
    (75, "Al-Anfal", "The Spoils of War"),
    (129, "At-Tawbah", "The Repentance"),
    (109, "Yunus", "Jonah"),
    (123, "Hud", "Hud"),
    (111, "Yusuf", "Joseph"),
    (43, "Ar-Ra'd", "The Thunder"),
    (52, "Ibrahim", "Abraham"),
    (99, "Al-Hijr", "The Rocky Tract"),
    (128, "An-Nahl", "The Bee"),
    (111, "Al-Isra", "The Night Journey"),
    (110, "Al-Kahf", "The Cave"),
    (98, "Maryam", "Mary"),
    (135, "Taha", "Ta-Ha"),
    (112, "Al-Anbya", "The Prophets"),
    (78, "Al-Hajj", "The Pilgrimage"),
    (118, "Al-Mu'minun", "The Believers"),
    (64, "An-Nur", "The Light"),
    (77, "Al-Furqan", "The Criterion"),
    (227, "Ash-Shu'ara", "The Poets"),
    (93, "An-Naml", "The Ant"),
    (88, "Al-Qasas", "The Stories"),
    (69, "Al-'Ankabut", "The Spider"),
    (60, "Ar-Rum", "The Romans"),
    (34, "Luqman", "Luqman"),
    (30, "As-Sajdah", "The Prostration"),
    (73, "Al-Ahzab", "The Combined Forces"),
    (54, "Saba", "Sheba"),
    (45, "Fatir", "Originator"),
    (83, "Ya-Sin", "Ya Sin"),
    (182, "As-Saffat", "Those who set the Ranks"),
    (88, "Sad", "The Letter \"Saad\""),
    (75, "Az-Zumar", "The Troops"),
    (85, "Ghafir", "The Forgiver"),
    (54, "Fussilat", "Explained in Detail"),
    (53, "Ash-Shuraa", "The Consultation"),
    (89, "Az-Zukhruf", "The Ornaments of Gold"),
    (59, "Ad-Dukhan", "The Smoke"),
    (37, "Al-Jathiyah", "The Crouching"),
    (35, "Al-Ahqaf", "The Wind-Curved Sandhills"),
    (38, "Muhammad", "Muhammad"),
    (29, "Al-Fath", "The Victory"),
    (18, "Al-Hujurat", "The Rooms"),
    (45, "Qaf", "The Letter \"Qaf\""),
    (60, "Adh-Dhariyat", "The Winnowing Winds"),
    (49, "At-Tur", "The Mount"),
    (62, "An-Najm", "The Star"),
    (55, "Al-Qamar", "The Moon"),
    (78, "Ar-Rahman", "The Beneficent"),
    (96, "Al-Waqi'ah", "The Inevitable"),
    (29, "Al-Hadid", "The Iron"),
    (22, "Al-Mujadila", "The Pleading Woman"),
    (24, "Al-Hashr", "The Exile"),
    (13, "Al-Mumtahanah", "She that is to be examined"),
    (14, "As-Saf", "The Ranks"),
    (11, "Al-Jumu'ah", "The Congregation, Friday"),
    (11, "Al-Munafiqun", "The Hypocrites"),
    (18, "At-Taghabun", "The Mutual Disillusion"),
    (12, "At-Talaq", "The Divorce"),
    (12, "At-Tahrim", "The Prohibition"),
    (30, "Al-Mulk", "The Sovereignty"),
    (52, "Al-Qalam", "The Pen"),
    (52, "Al-Haqqah", "The Reality"),
    (44, "Al-Ma'arij", "The Ascending Stairways"),
    (28, "Nuh", "Noah"),
    (28, "Al-Jinn", "The Jinn"),
    (20, "Al-Muzzammil", "The Enshrouded One"),
    (56, "Al-Muddaththir", "The Cloaked One"),
    (40, "Al-Qiyamah", "The Resurrection"),
    (31, "Al-Insan", "The Man"),
    (50, "Al-Mursalat", "The Emissaries"),
    (40, "An-Naba", "The Tidings"),
    (46, "An-Nazi'at", "Those who drag forth"),
    (42, "'Abasa", "He Frowned"),
    (29, "At-Takwir", "The Overthrowing"),
    (19, "Al-Infitar", "The Cleaving"),
    (36, "Al-Mutaffifin", "The Defrauding"),
    (25, "Al-Inshiqaq", "The Sundering"),
    (22, "Al-Buruj", "The Mansions of the Stars"),
    (17, "At-Tariq", "The Nightcomer"),
    (19, "Al-A'la", "The Most High"),
    (26, "Al-Ghashiyah", "The Overwhelming"),
    (30, "Al-Fajr", "The Dawn"),
    (20, "Al-Balad", "The City"),
    (15, "Ash-Shams", "The Sun"),
    (21, "Al-Layl", "The Night"),
    (11, "Ad-Duhaa", "The Morning Hours"),
    (8, "Ash-Sharh", "The Relief"),
    (8, "At-Tin", "The Fig"),
    (19, "Al-'Alaq", "The Clot"),
    (5, "Al-Qadr", "The Power"),
    (8, "Al-Bayyinah", "The Clear Proof"),
    (8, "Az-Zalzalah", "The Earthquake"),
    (11, "Al-'Adiyat", "The Courser"),
    (11, "Al-Qari'ah", "The Calamity"),
    (8, "At-Takathur", "The Rivalry in World Increase"),
    (3, "Al-'Asr", "The Declining Day"),
    (9, "Al-Humazah", "The Traducer"),
    (5, "Al-Fil", "The Elephant"),
    (4, "Quraysh", "Quraysh"),
    (7, "Al-Ma'un", "The Small Kindnesses"),
    (3, "Al-Kawthar", "The Abundance"),
    (6, "Al-Kafirun", "The Disbelievers"),
    (3, "An-Nasr", "The Divine Support"),
    (5, "Al-Masad", "The Palm Fiber"),
    (4, "Al-Ikhlas", "The Sincerity"),
    (5, "Al-Falaq", "The Daybreak"),
    (6, "An-Nas", "Mankind"),
];
