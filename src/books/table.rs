//! Chapter and verse counts for the 66 canonical books.

use super::BookInfo;

pub(super) static BOOKS: &[BookInfo] = &[
    BookInfo {
        code: "GEN",
        en_name: "Genesis",
        usfm_number: "01",
        sort: 1,
        verses: &[31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18,
            34, 24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57,
            38, 34, 34, 28, 34, 31, 22, 33, 26],
    },
    BookInfo {
        code: "EXO",
        en_name: "Exodus",
        usfm_number: "02",
        sort: 2,
        verses: &[22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26,
            36, 31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38],
    },
    BookInfo {
        code: "LEV",
        en_name: "Leviticus",
        usfm_number: "03",
        sort: 3,
        verses: &[17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27,
            24, 33, 44, 23, 55, 46, 34],
    },
    BookInfo {
        code: "NUM",
        en_name: "Numbers",
        usfm_number: "04",
        sort: 4,
        verses: &[54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29,
            35, 41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42, 56, 29, 34, 13],
    },
    BookInfo {
        code: "DEU",
        en_name: "Deuteronomy",
        usfm_number: "05",
        sort: 5,
        verses: &[46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20,
            23, 30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12],
    },
    BookInfo {
        code: "JOS",
        en_name: "Joshua",
        usfm_number: "06",
        sort: 6,
        verses: &[18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9,
            45, 34, 16, 33],
    },
    BookInfo {
        code: "JDG",
        en_name: "Judges",
        usfm_number: "07",
        sort: 7,
        verses: &[36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48,
            25],
    },
    BookInfo {
        code: "RUT",
        en_name: "Ruth",
        usfm_number: "08",
        sort: 8,
        verses: &[22, 23, 18, 22],
    },
    BookInfo {
        code: "1SA",
        en_name: "1 Samuel",
        usfm_number: "09",
        sort: 9,
        verses: &[28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42,
            15, 23, 29, 22, 44, 25, 12, 25, 11, 31, 13],
    },
    BookInfo {
        code: "2SA",
        en_name: "2 Samuel",
        usfm_number: "10",
        sort: 10,
        verses: &[27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26,
            22, 51, 39, 25],
    },
    BookInfo {
        code: "1KI",
        en_name: "1 Kings",
        usfm_number: "11",
        sort: 11,
        verses: &[53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43,
            29, 53],
    },
    BookInfo {
        code: "2KI",
        en_name: "2 Kings",
        usfm_number: "12",
        sort: 12,
        verses: &[18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21,
            26, 20, 37, 20, 30],
    },
    BookInfo {
        code: "1CH",
        en_name: "1 Chronicles",
        usfm_number: "13",
        sort: 13,
        verses: &[54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43, 27, 17, 19, 8,
            30, 19, 32, 31, 31, 32, 34, 21, 30],
    },
    BookInfo {
        code: "2CH",
        en_name: "2 Chronicles",
        usfm_number: "14",
        sort: 14,
        verses: &[17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14, 19, 34, 11, 37,
            20, 12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23],
    },
    BookInfo {
        code: "EZR",
        en_name: "Ezra",
        usfm_number: "15",
        sort: 15,
        verses: &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44],
    },
    BookInfo {
        code: "NEH",
        en_name: "Nehemiah",
        usfm_number: "16",
        sort: 16,
        verses: &[11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31],
    },
    BookInfo {
        code: "EST",
        en_name: "Esther",
        usfm_number: "17",
        sort: 17,
        verses: &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3],
    },
    BookInfo {
        code: "JOB",
        en_name: "Job",
        usfm_number: "18",
        sort: 18,
        verses: &[22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29,
            34, 30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 24, 34,
            17],
    },
    BookInfo {
        code: "PSA",
        en_name: "Psalms",
        usfm_number: "19",
        sort: 19,
        verses: &[6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31,
            6, 10, 22, 12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26,
            17, 11, 9, 14, 20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20, 7,
            35, 36, 5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18, 52,
            17, 16, 15, 5, 23, 11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7, 10, 10,
            9, 8, 18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26, 9, 8,
            24, 13, 10, 7, 12, 15, 21, 10, 20, 14, 9, 6],
    },
    BookInfo {
        code: "PRO",
        en_name: "Proverbs",
        usfm_number: "20",
        sort: 20,
        verses: &[33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30,
            31, 29, 35, 34, 28, 28, 27, 28, 27, 33, 31],
    },
    BookInfo {
        code: "ECC",
        en_name: "Ecclesiastes",
        usfm_number: "21",
        sort: 21,
        verses: &[18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14],
    },
    BookInfo {
        code: "SNG",
        en_name: "Song of Songs",
        usfm_number: "22",
        sort: 22,
        verses: &[17, 17, 11, 16, 16, 13, 13, 14],
    },
    BookInfo {
        code: "ISA",
        en_name: "Isaiah",
        usfm_number: "23",
        sort: 23,
        verses: &[31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17,
            25, 18, 23, 12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28,
            28, 25, 13, 15, 22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12,
            25, 24],
    },
    BookInfo {
        code: "JER",
        en_name: "Jeremiah",
        usfm_number: "24",
        sort: 24,
        verses: &[19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18,
            14, 30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18,
            22, 13, 30, 5, 28, 7, 47, 39, 46, 64, 34],
    },
    BookInfo {
        code: "LAM",
        en_name: "Lamentations",
        usfm_number: "25",
        sort: 25,
        verses: &[22, 22, 66, 22, 22],
    },
    BookInfo {
        code: "EZK",
        en_name: "Ezekiel",
        usfm_number: "26",
        sort: 26,
        verses: &[28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49,
            32, 31, 49, 27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26,
            20, 27, 31, 25, 24, 23, 35],
    },
    BookInfo {
        code: "DAN",
        en_name: "Daniel",
        usfm_number: "27",
        sort: 27,
        verses: &[21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13],
    },
    BookInfo {
        code: "HOS",
        en_name: "Hosea",
        usfm_number: "28",
        sort: 28,
        verses: &[11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9],
    },
    BookInfo {
        code: "JOL",
        en_name: "Joel",
        usfm_number: "29",
        sort: 29,
        verses: &[20, 32, 21],
    },
    BookInfo {
        code: "AMO",
        en_name: "Amos",
        usfm_number: "30",
        sort: 30,
        verses: &[15, 16, 15, 13, 27, 14, 17, 14, 15],
    },
    BookInfo {
        code: "OBA",
        en_name: "Obadiah",
        usfm_number: "31",
        sort: 31,
        verses: &[21],
    },
    BookInfo {
        code: "JON",
        en_name: "Jonah",
        usfm_number: "32",
        sort: 32,
        verses: &[17, 10, 10, 11],
    },
    BookInfo {
        code: "MIC",
        en_name: "Micah",
        usfm_number: "33",
        sort: 33,
        verses: &[16, 13, 12, 13, 15, 16, 20],
    },
    BookInfo {
        code: "NAM",
        en_name: "Nahum",
        usfm_number: "34",
        sort: 34,
        verses: &[15, 13, 19],
    },
    BookInfo {
        code: "HAB",
        en_name: "Habakkuk",
        usfm_number: "35",
        sort: 35,
        verses: &[17, 20, 19],
    },
    BookInfo {
        code: "ZEP",
        en_name: "Zephaniah",
        usfm_number: "36",
        sort: 36,
        verses: &[18, 15, 20],
    },
    BookInfo {
        code: "HAG",
        en_name: "Haggai",
        usfm_number: "37",
        sort: 37,
        verses: &[15, 23],
    },
    BookInfo {
        code: "ZEC",
        en_name: "Zechariah",
        usfm_number: "38",
        sort: 38,
        verses: &[21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21],
    },
    BookInfo {
        code: "MAL",
        en_name: "Malachi",
        usfm_number: "39",
        sort: 39,
        verses: &[14, 17, 18, 6],
    },
    BookInfo {
        code: "MAT",
        en_name: "Matthew",
        usfm_number: "41",
        sort: 40,
        verses: &[25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34,
            46, 46, 39, 51, 46, 75, 66, 20],
    },
    BookInfo {
        code: "MRK",
        en_name: "Mark",
        usfm_number: "42",
        sort: 41,
        verses: &[45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20],
    },
    BookInfo {
        code: "LUK",
        en_name: "Luke",
        usfm_number: "43",
        sort: 42,
        verses: &[80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47,
            38, 71, 56, 53],
    },
    BookInfo {
        code: "JHN",
        en_name: "John",
        usfm_number: "44",
        sort: 43,
        verses: &[51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31,
            25],
    },
    BookInfo {
        code: "ACT",
        en_name: "Acts",
        usfm_number: "45",
        sort: 44,
        verses: &[26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38,
            40, 30, 35, 27, 27, 32, 44, 31],
    },
    BookInfo {
        code: "ROM",
        en_name: "Romans",
        usfm_number: "46",
        sort: 45,
        verses: &[32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27],
    },
    BookInfo {
        code: "1CO",
        en_name: "1 Corinthians",
        usfm_number: "47",
        sort: 46,
        verses: &[31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24],
    },
    BookInfo {
        code: "2CO",
        en_name: "2 Corinthians",
        usfm_number: "48",
        sort: 47,
        verses: &[24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14],
    },
    BookInfo {
        code: "GAL",
        en_name: "Galatians",
        usfm_number: "49",
        sort: 48,
        verses: &[24, 21, 29, 31, 26, 18],
    },
    BookInfo {
        code: "EPH",
        en_name: "Ephesians",
        usfm_number: "50",
        sort: 49,
        verses: &[23, 22, 21, 32, 33, 24],
    },
    BookInfo {
        code: "PHP",
        en_name: "Philippians",
        usfm_number: "51",
        sort: 50,
        verses: &[30, 30, 21, 23],
    },
    BookInfo {
        code: "COL",
        en_name: "Colossians",
        usfm_number: "52",
        sort: 51,
        verses: &[29, 23, 25, 18],
    },
    BookInfo {
        code: "1TH",
        en_name: "1 Thessalonians",
        usfm_number: "53",
        sort: 52,
        verses: &[10, 20, 13, 18, 28],
    },
    BookInfo {
        code: "2TH",
        en_name: "2 Thessalonians",
        usfm_number: "54",
        sort: 53,
        verses: &[12, 17, 18],
    },
    BookInfo {
        code: "1TI",
        en_name: "1 Timothy",
        usfm_number: "55",
        sort: 54,
        verses: &[20, 15, 16, 16, 25, 21],
    },
    BookInfo {
        code: "2TI",
        en_name: "2 Timothy",
        usfm_number: "56",
        sort: 55,
        verses: &[18, 26, 17, 22],
    },
    BookInfo {
        code: "TIT",
        en_name: "Titus",
        usfm_number: "57",
        sort: 56,
        verses: &[16, 15, 15],
    },
    BookInfo {
        code: "PHM",
        en_name: "Philemon",
        usfm_number: "58",
        sort: 57,
        verses: &[25],
    },
    BookInfo {
        code: "HEB",
        en_name: "Hebrews",
        usfm_number: "59",
        sort: 58,
        verses: &[14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25],
    },
    BookInfo {
        code: "JAS",
        en_name: "James",
        usfm_number: "60",
        sort: 59,
        verses: &[27, 26, 18, 17, 20],
    },
    BookInfo {
        code: "1PE",
        en_name: "1 Peter",
        usfm_number: "61",
        sort: 60,
        verses: &[25, 25, 22, 19, 14],
    },
    BookInfo {
        code: "2PE",
        en_name: "2 Peter",
        usfm_number: "62",
        sort: 61,
        verses: &[21, 22, 18],
    },
    BookInfo {
        code: "1JN",
        en_name: "1 John",
        usfm_number: "63",
        sort: 62,
        verses: &[10, 29, 24, 21, 21],
    },
    BookInfo {
        code: "2JN",
        en_name: "2 John",
        usfm_number: "64",
        sort: 63,
        verses: &[13],
    },
    BookInfo {
        code: "3JN",
        en_name: "3 John",
        usfm_number: "65",
        sort: 64,
        verses: &[14],
    },
    BookInfo {
        code: "JUD",
        en_name: "Jude",
        usfm_number: "66",
        sort: 65,
        verses: &[25],
    },
    BookInfo {
        code: "REV",
        en_name: "Revelation",
        usfm_number: "67",
        sort: 66,
        verses: &[20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21, 18, 24, 21, 15,
            27, 21],
    },
];
