//! Known city-level names, checked in table order.

pub const KNOWN_CITIES: &[&str] = &[
    // Zhejiang
    "杭州市", "宁波市", "温州市", "嘉兴市", "湖州市", "绍兴市", "金华市",
    "衢州市", "舟山市", "台州市", "丽水市",
    // Jiangsu
    "南京市", "苏州市", "无锡市", "常州市", "镇江市", "南通市", "扬州市",
    "盐城市", "徐州市", "淮安市", "连云港市", "泰州市", "宿迁市",
    // Guangdong
    "广州市", "深圳市", "珠海市", "佛山市", "东莞市", "中山市", "惠州市",
    "汕头市", "湛江市", "茂名市", "肇庆市", "梅州市", "汕尾市", "河源市",
    "阳江市", "清远市", "潮州市", "揭阳市", "云浮市", "韶关市", "江门市",
    // Sichuan
    "成都市", "绵阳市", "德阳市", "攀枝花市", "泸州市", "广元市", "遂宁市",
    "内江市", "乐山市", "南充市", "眉山市", "宜宾市", "广安市", "达州市",
    "雅安市", "巴中市", "资阳市", "自贡市",
    // Shandong
    "济南市", "青岛市", "烟台市", "潍坊市", "威海市", "临沂市", "淄博市",
    "济宁市", "泰安市", "聊城市", "德州市", "滨州市", "东营市", "菏泽市",
    "枣庄市", "日照市",
    // Fujian
    "福州市", "厦门市", "泉州市", "漳州市", "莆田市", "龙岩市", "三明市",
    "南平市", "宁德市",
    // Hubei
    "武汉市", "宜昌市", "襄阳市", "荆州市", "黄石市", "十堰市", "荆门市",
    "鄂州市", "孝感市", "黄冈市", "咸宁市", "随州市",
    // Hunan
    "长沙市", "株洲市", "湘潭市", "衡阳市", "邵阳市", "岳阳市", "常德市",
    "张家界市", "益阳市", "娄底市", "郴州市", "永州市", "怀化市",
    // Shanxi
    "太原市", "大同市", "阳泉市", "长治市", "晋城市", "朔州市", "晋中市",
    "运城市", "忻州市", "临汾市", "吕梁市",
    // Shaanxi
    "西安市", "咸阳市", "宝鸡市", "渭南市", "铜川市", "延安市", "榆林市",
    "汉中市", "安康市", "商洛市",
    // Anhui
    "合肥市", "芜湖市", "蚌埠市", "淮南市", "马鞍山市", "淮北市", "铜陵市",
    "安庆市", "黄山市", "滁州市", "阜阳市", "宿州市", "六安市", "亳州市",
    "池州市", "宣城市",
    // Jiangxi
    "南昌市", "九江市", "景德镇市", "萍乡市", "新余市", "鹰潭市", "赣州市",
    "吉安市", "宜春市", "抚州市", "上饶市",
    // Henan
    "郑州市", "开封市", "洛阳市", "平顶山市", "安阳市", "鹤壁市", "新乡市",
    "焦作市", "濮阳市", "许昌市", "漯河市", "三门峡市", "南阳市", "商丘市",
    "信阳市", "周口市", "驻马店市",
    // Hebei
    "石家庄市", "唐山市", "秦皇岛市", "邯郸市", "邢台市", "保定市", "张家口市",
    "承德市", "沧州市", "廊坊市", "衡水市",
    // Heilongjiang
    "哈尔滨市", "齐齐哈尔市", "牡丹江市", "佳木斯市", "大庆市", "鸡西市", "双鸭山市",
    "伊春市", "七台河市", "鹤岗市", "黑河市", "绥化市",
    // Jilin
    "长春市", "吉林市", "四平市", "辽源市", "通化市", "白山市", "松原市",
    "白城市",
    // Liaoning
    "沈阳市", "大连市", "鞍山市", "抚顺市", "本溪市", "丹东市", "锦州市",
    "营口市", "阜新市", "辽阳市", "盘锦市", "铁岭市", "朝阳市", "葫芦岛市",
    // Inner Mongolia
    "呼和浩特市", "包头市", "乌海市", "赤峰市", "通辽市", "鄂尔多斯市", "呼伦贝尔市",
    "巴彦淖尔市", "乌兰察布市",
    // Guangxi
    "南宁市", "柳州市", "桂林市", "梧州市", "北海市", "防城港市", "钦州市",
    "贵港市", "玉林市", "百色市", "贺州市", "河池市", "来宾市", "崇左市",
    // Hainan
    "海口市", "三亚市", "三沙市", "儋州市",
    // Guizhou
    "贵阳市", "六盘水市", "遵义市", "安顺市", "毕节市", "铜仁市",
    // Yunnan
    "昆明市", "曲靖市", "玉溪市", "保山市", "昭通市", "丽江市", "普洱市",
    "临沧市",
    // Tibet
    "拉萨市", "日喀则市", "昌都市", "林芝市", "山南市", "那曲市",
    // Gansu
    "兰州市", "嘉峪关市", "金昌市", "白银市", "天水市", "武威市", "张掖市",
    "平凉市", "酒泉市", "庆阳市", "定西市", "陇南市",
    // Qinghai
    "西宁市", "海东市",
    // Ningxia
    "银川市", "石嘴山市", "吴忠市", "固原市", "中卫市",
    // Xinjiang
    "乌鲁木齐市", "克拉玛依市", "吐鲁番市", "哈密市",
    // Municipalities
    "北京市", "天津市", "上海市", "重庆市",
    // County-level cities
    "临海市", "义乌市", "东阳市", "永康市", "江山市", "龙泉市",
];
