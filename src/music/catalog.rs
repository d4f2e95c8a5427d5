use super::Song;

/// Argentine classics by decade, the built-in playlist of the music screen.
pub const CATALOG: &[Song] = &[
    Song {
        decade: 1960,
        title: "La felicidad",
        artist: "Palito Ortega",
        youtube_url: "https://www.youtube.com/watch?v=Z9As8OJ165w",
    },
    Song {
        decade: 1960,
        title: "Rosa Rosa",
        artist: "Sandro",
        youtube_url: "https://www.youtube.com/watch?v=NeGN_cs9yfE",
    },
    Song {
        decade: 1960,
        title: "Fuiste mía un verano",
        artist: "Leonardo Favio",
        youtube_url: "https://www.youtube.com/watch?v=Ohuux_Rc2XU",
    },
    Song {
        decade: 1970,
        title: "Rasguña las piedras",
        artist: "Sui Generis",
        youtube_url: "https://www.youtube.com/watch?v=DrKRNJGAyHw",
    },
    Song {
        decade: 1970,
        title: "Seminare",
        artist: "Serú Girán",
        youtube_url: "https://www.youtube.com/watch?v=xVdtGR_zgdA",
    },
    Song {
        decade: 1980,
        title: "De música ligera",
        artist: "Soda Stereo",
        youtube_url: "https://www.youtube.com/watch?v=T_FkEw27XJ0",
    },
    Song {
        decade: 1980,
        title: "Wadu Wadu",
        artist: "Virus",
        youtube_url: "https://www.youtube.com/watch?v=iBCD4tsbHeE",
    },
    Song {
        decade: 1990,
        title: "Matador",
        artist: "Los Fabulosos Cadillacs",
        youtube_url: "https://www.youtube.com/watch?v=pjPA7CXutDw",
    },
    Song {
        decade: 1990,
        title: "Flaca",
        artist: "Andrés Calamaro",
        youtube_url: "https://www.youtube.com/watch?v=UCF9oHXhDMU",
    },
];
